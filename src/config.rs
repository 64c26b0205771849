//! Command-line options for the `showbytes` binary

use std::fmt;

/// What the binary should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the demo report to stdout
    Print,
    /// Open the interactive viewer
    Tui,
    /// Print usage and exit
    Help,
}

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Also print the pointer walkthrough
    pub pointers: bool,
    /// Inspect only this many bytes of the demo word
    pub prefix: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Print,
            pointers: false,
            prefix: None,
        }
    }
}

/// Errors in the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidNumber { flag: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Option '{}' expects a byte count, got '{}'", flag, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse options, not including the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--tui" => config.mode = Mode::Tui,
                "--pointers" => config.pointers = true,
                "-h" | "--help" => config.mode = Mode::Help,
                flag @ "--prefix" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
                    let n = value
                        .as_ref()
                        .parse::<usize>()
                        .map_err(|_| ConfigError::InvalidNumber {
                            flag: flag.to_string(),
                            value: value.as_ref().to_string(),
                        })?;
                    config.prefix = Some(n);
                }
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        Ok(config)
    }
}

/// Usage text for `program_name`
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [--tui] [--pointers] [--prefix N]\n\
         \n\
         Options:\n  \
           --tui         Browse specimens in an interactive viewer\n  \
           --pointers    Also print the pointer walkthrough\n  \
           --prefix N    Inspect only the first N bytes of 0x12345678\n  \
           -h, --help    Show this message",
        program_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_prints_report() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags() {
        let config = Config::from_args(["--pointers", "--prefix", "2"]).unwrap();
        assert_eq!(config.mode, Mode::Print);
        assert!(config.pointers);
        assert_eq!(config.prefix, Some(2));

        let config = Config::from_args(["--tui"]).unwrap();
        assert_eq!(config.mode, Mode::Tui);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            Config::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
        assert_eq!(
            Config::from_args(["--prefix"]),
            Err(ConfigError::MissingValue("--prefix".to_string()))
        );
        assert!(matches!(
            Config::from_args(["--prefix", "-1"]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
