use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid key {key:?}: {reason}")]
    KeyFormat { key: String, reason: KeyFormatReason },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyFormatReason {
    TooShort,
    NonDigitSuffix,
}

impl std::fmt::Display for KeyFormatReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                KeyFormatReason::TooShort => "shorter than 3 characters",
                KeyFormatReason::NonDigitSuffix => "last 3 characters are not decimal digits",
            }
        )
    }
}
