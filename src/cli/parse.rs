use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--no-lowercase" => flags.no_lowercase = true,
            "--no-uppercase" => flags.no_uppercase = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number_value(args, i, "--length")?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number_value(args, i, "--number")?);
            }
            "--check" => {
                i += 1;
                let value = args.get(i).ok_or(ParseError::MissingValue("--check"))?;
                flags.check = Some(value.clone());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number_value(args: &[String], i: usize, flag: &'static str) -> Result<usize, ParseError> {
    let value = args.get(i).ok_or(ParseError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("passmint")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&argv(&["-l", "20", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn parses_category_toggles() {
        let flags = parse(&argv(&["--no-uppercase", "--no-symbols"])).unwrap();
        assert!(flags.no_uppercase);
        assert!(flags.no_symbols);
        assert!(!flags.no_lowercase);
        assert!(!flags.no_digits);
    }

    #[test]
    fn parses_check_value() {
        let flags = parse(&argv(&["--check", "hunter2"])).unwrap();
        assert_eq!(flags.check.as_deref(), Some("hunter2"));
    }

    #[test]
    fn no_arguments_yields_defaults() {
        assert_eq!(parse(&argv(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn rejects_unknown_argument() {
        assert_eq!(
            parse(&argv(&["--frobnicate"])),
            Err(ParseError::UnknownArg("--frobnicate".into()))
        );
    }

    #[test]
    fn rejects_malformed_number() {
        assert_eq!(
            parse(&argv(&["-l", "twelve"])),
            Err(ParseError::InvalidNumber("twelve".into()))
        );
    }

    #[test]
    fn rejects_missing_value() {
        assert_eq!(
            parse(&argv(&["-n"])),
            Err(ParseError::MissingValue("--number"))
        );
        assert_eq!(
            parse(&argv(&["--check"])),
            Err(ParseError::MissingValue("--check"))
        );
    }
}
