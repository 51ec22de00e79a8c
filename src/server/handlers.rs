//! Command handlers for the contact assistant.
//!
//! Every handler returns a `BookResult<String>`. `ContactAssistant::handle`
//! is the single place where a failure is turned into the text shown to
//! the user, so no command can stop the prompt loop.

use super::command::{parse_input, Command};
use crate::config::Config;
use crate::domain::birthday::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use crate::repositories::AddressBook;
use crate::services::birthday_service::group_by_date;
use chrono::{Local, NaiveDate};

/// Source of "today" for birthday queries.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// What the prompt loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Message(String),
    /// Print the message and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

/// The interactive assistant: an address book plus the command handlers.
#[derive(Debug, Clone)]
pub struct ContactAssistant {
    book: AddressBook,
    birthday_window_days: u32,
    clock: Clock,
}

impl ContactAssistant {
    /// Create an assistant with an empty address book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create an assistant around an existing address book.
    pub fn with_book(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            birthday_window_days: config.birthday_window_days,
            clock: local_today,
        }
    }

    /// Replace the clock used for birthday queries.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line.
    pub fn handle(&mut self, line: &str) -> Reply {
        let (word, args) = parse_input(line);

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(command = %word, "Unrecognized command");
                return Reply::Message(e.to_string());
            }
        };

        tracing::debug!(command = %command, args = args.len(), "Dispatching command");

        match self.dispatch(command, &args) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(command = %command, error = %e, "Command failed");
                Reply::Message(e.to_string())
            }
        }
    }

    fn dispatch(&mut self, command: Command, args: &[&str]) -> BookResult<Reply> {
        let message = match command {
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => self.add_contact(args)?,
            Command::Change => self.change_contact(args)?,
            Command::Phone => self.show_phones(args)?,
            Command::All => self.show_all(),
            Command::AddBirthday => self.add_birthday(args)?,
            Command::ShowBirthday => self.show_birthday(args)?,
            Command::Birthdays => self.birthdays(),
        };
        Ok(Reply::Message(message))
    }

    /// `add <name> <phone>`
    ///
    /// An unknown name is added before the phone is validated, so the
    /// contact exists even when the phone is rejected.
    fn add_contact(&mut self, args: &[&str]) -> BookResult<String> {
        let [name, phone] = required::<2>(args)?;

        let (record, created) = self.book.find_or_insert(name)?;
        record.add_phone(phone)?;

        if created {
            Ok("Contact added.".to_string())
        } else {
            Ok("Contact updated.".to_string())
        }
    }

    /// `change <name> <old phone> <new phone>`
    fn change_contact(&mut self, args: &[&str]) -> BookResult<String> {
        let [name, old_phone, new_phone] = required::<3>(args)?;

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(BookError::contact_not_found)?;
        record.edit_phone(old_phone, new_phone)?;
        Ok("Phone updated.".to_string())
    }

    /// `phone <name>`
    fn show_phones(&self, args: &[&str]) -> BookResult<String> {
        let [name] = required::<1>(args)?;

        let record = self
            .book
            .find(name)
            .ok_or_else(BookError::contact_not_found)?;
        if record.phones().is_empty() {
            return Ok(format!("No phones for {}.", name));
        }
        Ok(format!("{}: {}", name, record.phones_joined()))
    }

    /// `all`
    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "Address book is empty.".to_string();
        }
        self.book.to_string()
    }

    /// `add-birthday <name> <DD.MM.YYYY>`
    ///
    /// Creates the contact when the name is unknown, before the date is
    /// validated.
    fn add_birthday(&mut self, args: &[&str]) -> BookResult<String> {
        let [name, birthday] = required::<2>(args)?;

        let (record, _) = self.book.find_or_insert(name)?;
        record.add_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    /// `show-birthday <name>`
    fn show_birthday(&self, args: &[&str]) -> BookResult<String> {
        let [name] = required::<1>(args)?;

        let record = self
            .book
            .find(name)
            .ok_or_else(BookError::contact_not_found)?;
        match record.birthday() {
            Some(birthday) => Ok(format!("{}: {}", name, birthday)),
            None => Ok("Birthday is not set.".to_string()),
        }
    }

    /// `birthdays`
    fn birthdays(&self) -> String {
        let today = (self.clock)();
        let upcoming = self
            .book
            .get_upcoming_birthdays(self.birthday_window_days, today);

        if upcoming.is_empty() {
            return format!(
                "No birthdays in the next {} days.",
                self.birthday_window_days
            );
        }

        group_by_date(&upcoming)
            .into_iter()
            .map(|(date, names)| format!("{}: {}", date.format(DATE_FORMAT), names.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Take the first `N` positional arguments; extra arguments are ignored.
fn required<'a, const N: usize>(args: &[&'a str]) -> BookResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|slice| <[&'a str; N]>::try_from(slice).ok())
        .ok_or(BookError::NotEnoughArguments)
}
