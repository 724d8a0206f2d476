use std::io;
use thiserror::Error;

/// Input-rule violations raised by the validators.
/// The rendered message is what the demos print.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("Age cannot be negative")]
    NegativeAge,
    #[error("Age cannot be greater than 150")]
    AgeTooLarge,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// What can escape a tour run: failing to write to stdout or stderr.
/// Demo-level failures are reported and recovered inside each demo.
#[derive(Error, Debug)]
pub enum TourError {
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_printed_text() {
        assert_eq!(ValidationError::NegativeAge.to_string(), "Age cannot be negative");
        assert_eq!(
            ValidationError::AgeTooLarge.to_string(),
            "Age cannot be greater than 150"
        );
        assert_eq!(
            ValidationError::InvalidEmail("nope".into()).to_string(),
            "Invalid email format: nope"
        );
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn output_errors_are_labelled_as_output() {
        fn write_to_closed_pipe() -> Result<(), TourError> {
            Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }
        let err = write_to_closed_pipe().unwrap_err();
        assert!(matches!(err, TourError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "output error: pipe closed");
    }

    #[test]
    fn config_error_helpers() {
        let err = ConfigError::invalid_value("temp_file", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'temp_file': must not be empty"
        );
    }
}
