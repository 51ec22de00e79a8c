//! Contact Book - an interactive command-line address book.
//!
//! This library keeps contacts in memory, validates names, phone numbers,
//! and birthdays, and reports which contacts have a birthday coming up.
//! Weekend birthdays are observed on the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record
//! - **repositories**: The in-memory address book
//! - **services**: Upcoming birthday scheduling
//! - **server**: Command parsing, handlers, and the prompt loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use repositories::AddressBook;
pub use server::{run_server, Command, ContactAssistant, Reply};
pub use services::UpcomingBirthday;
