//! Application service layer.
//!
//! Services contain the logic that sits on top of the address book and is
//! independent of how commands reach it.

pub mod birthday_service;

pub use birthday_service::{group_by_date, upcoming_birthdays, UpcomingBirthday};
