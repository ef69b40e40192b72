//! Configuration error types shared by the host-facing surface.

use thiserror::Error;

/// Errors raised while interpreting host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The architecture name is not one of the supported OPTABLE values.
    #[error("unknown system architecture: {0}")]
    UnknownArchitecture(String),

    /// An ICTL column value is outside its permitted interval.
    #[error("invalid {field} column {value}: must be in {min}..={max}")]
    InvalidColumn {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// An unrecognized preprocessor option keyword.
    #[error("unknown preprocessor option: {0}")]
    UnknownOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ConfigError::UnknownArchitecture("Z99".into());
        assert_eq!(e.to_string(), "unknown system architecture: Z99");

        let e = ConfigError::InvalidColumn {
            field: "begin",
            value: 0,
            min: 1,
            max: 40,
        };
        assert!(e.to_string().contains("begin"));
    }
}
