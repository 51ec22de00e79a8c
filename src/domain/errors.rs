//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The display text is shown to the user verbatim, so it never echoes the
/// rejected input back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidPhone(_) => write!(f, "phone number must contain exactly 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "invalid date format, expected DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_echo_input() {
        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert_eq!(err.to_string(), "phone number must contain exactly 10 digits");

        let err = ValidationError::InvalidBirthday("31.02.2020".to_string());
        assert_eq!(err.to_string(), "invalid date format, expected DD.MM.YYYY");

        assert_eq!(ValidationError::EmptyName.to_string(), "name must not be empty");
    }
}
