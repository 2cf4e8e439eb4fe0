//! Localized date rendering for item cards.

use crate::model::timestamp::format_iso_millis;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// A strftime pattern chrono cannot parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDatePattern {
    pub pattern: String,
}

impl Display for InvalidDatePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a valid strftime pattern: `{}`", self.pattern)
    }
}

impl Error for InvalidDatePattern {}

/// Rejects patterns containing specifiers chrono does not understand.
pub fn check_pattern(pattern: &str) -> Result<(), InvalidDatePattern> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(InvalidDatePattern {
            pattern: pattern.to_string(),
        });
    }
    Ok(())
}

/// Offset and patterns used to show `created_at` to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDisplay {
    offset: FixedOffset,
    date_format: String,
    datetime_format: String,
}

impl DateDisplay {
    pub fn new(
        offset: FixedOffset,
        date_format: impl Into<String>,
        datetime_format: impl Into<String>,
    ) -> Result<Self, InvalidDatePattern> {
        let date_format = date_format.into();
        let datetime_format = datetime_format.into();
        check_pattern(&date_format)?;
        check_pattern(&datetime_format)?;
        Ok(Self {
            offset,
            date_format,
            datetime_format,
        })
    }

    /// Date-only form, used by repertoire cards.
    pub fn date(&self, value: &DateTime<Utc>) -> String {
        self.format(value, &self.date_format)
    }

    /// Date and time, used by message rows.
    pub fn date_time(&self, value: &DateTime<Utc>) -> String {
        self.format(value, &self.datetime_format)
    }

    // Falls back to the persisted ISO form if chrono refuses to format.
    fn format(&self, value: &DateTime<Utc>, pattern: &str) -> String {
        let mut out = String::new();
        let local = value.with_timezone(&self.offset);
        match write!(out, "{}", local.format(pattern)) {
            Ok(()) => out,
            Err(_) => format_iso_millis(value),
        }
    }
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DateDisplay, InvalidDatePattern};
    use chrono::{DateTime, FixedOffset, Utc};

    #[test]
    fn offset_shifts_the_calendar_day() {
        let value: DateTime<Utc> = "2024-05-01T23:30:00.000Z".parse().unwrap();
        let madrid = DateDisplay::new(
            FixedOffset::east_opt(2 * 3600).unwrap(),
            "%d/%m/%Y",
            "%d/%m/%Y, %H:%M:%S",
        )
        .unwrap();

        assert_eq!(DateDisplay::default().date(&value), "01/05/2024");
        assert_eq!(madrid.date(&value), "02/05/2024");
        assert_eq!(madrid.date_time(&value), "02/05/2024, 01:30:00");
    }

    #[test]
    fn unknown_specifier_is_rejected_up_front() {
        let utc = FixedOffset::east_opt(0).unwrap();

        let err = DateDisplay::new(utc, "%Q", "%d/%m/%Y").unwrap_err();
        assert_eq!(
            err,
            InvalidDatePattern {
                pattern: "%Q".to_string()
            }
        );
        assert!(DateDisplay::new(utc, "%d/%m/%Y", "%H:%Q").is_err());
    }
}
