//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records, dates, and assistants with a
//! pinned clock so birthday output is deterministic.

use chrono::NaiveDate;
use contact_book::{AddressBook, Config, ContactAssistant, Record};

/// Monday, 10 June 2024.
#[allow(dead_code)]
pub fn reference_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Build a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// An address book with a few contacts spread around the reference week.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &["0501234567"], Some("15.06.1990")));
    book.add_record(sample_record(
        "Bob",
        &["0671112233", "0939998877"],
        Some("12.06.1985"),
    ));
    book.add_record(sample_record("Carol", &[], Some("05.06.1992")));
    book.add_record(sample_record("Dave", &["0441234567"], None));
    book
}

/// An assistant with default config whose clock is pinned to `reference_monday`.
#[allow(dead_code)]
pub fn pinned_assistant(book: AddressBook) -> ContactAssistant {
    ContactAssistant::with_book(book, &Config::default()).with_clock(reference_monday)
}
