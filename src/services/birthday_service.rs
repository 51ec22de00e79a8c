//! Birthday scheduling.
//!
//! Works out which contacts have a birthday inside an upcoming window. A
//! birthday that falls on a weekend is observed on the following Monday.

use crate::domain::birthday::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// A contact whose (observed) birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Observed date, already moved off the weekend
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The observed date as `DD.MM.YYYY`.
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Move a birthday onto `year`.
///
/// February 29 is clamped to February 28 when `year` is not a leap year.
pub fn project_onto_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = project_onto_year(birthday, today.year())?;
    if this_year < today {
        project_onto_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Shift Saturday and Sunday onto the following Monday.
///
/// Returns `None` when the Monday lies past the last representable date.
pub fn observed_on_weekday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

/// Last day of a window of `window_days` days starting at `today`.
///
/// Saturates at `NaiveDate::MAX` for windows reaching past the calendar.
pub fn window_end(today: NaiveDate, window_days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(window_days.saturating_sub(1))))
        .unwrap_or(NaiveDate::MAX)
}

/// Collect birthdays observed within `[today, today + window_days - 1]`.
///
/// Results follow the iteration order of `records`; they are not sorted.
/// A zero-day window is always empty.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    if window_days == 0 {
        return Vec::new();
    }
    let end = window_end(today, window_days);

    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let upcoming = next_occurrence(birthday.date(), today)?;
            let observed = observed_on_weekday(upcoming)?;

            (today <= observed && observed <= end).then(|| UpcomingBirthday {
                name: record.name().as_str().to_string(),
                date: observed,
            })
        })
        .collect()
}

/// Group names by observed date, earliest date first.
///
/// Names within a date keep the order they were encountered in.
pub fn group_by_date(upcoming: &[UpcomingBirthday]) -> Vec<(NaiveDate, Vec<String>)> {
    let mut groups: Vec<(NaiveDate, Vec<String>)> = Vec::new();

    for entry in upcoming {
        match groups.iter_mut().find(|(date, _)| *date == entry.date) {
            Some((_, names)) => names.push(entry.name.clone()),
            None => groups.push((entry.date, vec![entry.name.clone()])),
        }
    }

    groups.sort_by_key(|(date, _)| *date);
    groups
}
