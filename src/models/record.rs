//! Record model representing a single contact.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult, OLD_PHONE_NOT_FOUND};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Phones keep their insertion order and may repeat. Fields are private so
/// every value passes through the validating constructors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Missing numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == phone) {
            self.phones.remove(index);
        }
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// The new number is appended before the old one is removed, so an
    /// edited number moves to the end of the list. If `new_phone` is invalid
    /// the record is left untouched.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if the record has no `old_phone`
    /// - `BookError::Validation` if `new_phone` is not a valid phone number
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        if self.find_phone(old_phone).is_none() {
            return Err(BookError::NotFound(OLD_PHONE_NOT_FOUND.to_string()));
        }

        self.add_phone(new_phone)?;
        self.remove_phone(old_phone);
        Ok(())
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`, as used by listings.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}
