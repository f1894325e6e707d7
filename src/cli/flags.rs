#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub no_lowercase: bool,
    pub no_uppercase: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub check: Option<String>,
}
