//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted birthday layout, in `chrono` format syntax.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months for `%d`/`%m`, so the
// two-digit layout is enforced up front.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("date shape regex is valid"));

/// A validated birthday.
///
/// Holds both the canonical `DD.MM.YYYY` text and the parsed calendar date
/// used for scheduling.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.06.1990");
/// assert_eq!(birthday.date().month(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the exact layout or does not name a real calendar date (e.g. `30.02.2020`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !DATE_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self::from_date(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Build a birthday from an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            text: date.format(DATE_FORMAT).to_string(),
            date,
        }
    }

    /// Get the canonical text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert into the canonical text.
    pub fn into_inner(self) -> String {
        self.text
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as canonical text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from text with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.as_str(), "15.06.1990");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("29.02.1900").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("31.04.2020").is_err());
        assert!(Birthday::new("00.05.2020").is_err());
        assert!(Birthday::new("10.13.2020").is_err());
        assert!(Birthday::new("10.00.2020").is_err());
    }

    #[test]
    fn test_birthday_rejects_other_layouts() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.6.1990").is_err());
        assert!(Birthday::new("1990-06-15").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("15.06.90").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
        assert!(Birthday::new(" 15.06.1990").is_err());
    }

    #[test]
    fn test_birthday_from_date_formats_canonically() {
        let date = NaiveDate::from_ymd_opt(2001, 1, 2).unwrap();
        assert_eq!(Birthday::from_date(date).as_str(), "02.01.2001");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.12.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.12.1985\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.11.2000\"");
        assert!(result.is_err());
    }
}
