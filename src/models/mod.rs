//! Data models for the contact book.
//!
//! This module contains the record type that groups a contact's validated
//! name, phone numbers, and optional birthday.

pub mod record;

pub use record::Record;
