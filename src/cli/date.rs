use std::str::FromStr;

use chrono::NaiveDate;

use crate::prelude::*;

/// Date as specified on the command line, resolved against an explicit current date.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DateArg {
    Today,
    Tomorrow,
    On(NaiveDate),
}

impl DateArg {
    /// Resolve into the required anchor day and the adjacent day appended to it.
    ///
    /// Both `today` and `tomorrow` anchor on today, so that today is analyzed before
    /// tomorrow's prices are published, and tomorrow is appended once they are.
    pub fn resolve(self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let anchor = match self {
            Self::Today | Self::Tomorrow => today,
            Self::On(date) => date,
        };
        let adjacent = anchor.succ_opt().context("the next date is out of range")?;
        Ok((anchor, adjacent))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid date `{_0}`, expected `YYYY-MM-DD`, `today` or `tomorrow`")]
pub struct InvalidDate(#[error(not(source))] String);

impl FromStr for DateArg {
    type Err = InvalidDate;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "today" | "idag" => Ok(Self::Today),
            "tomorrow" | "imorgon" => Ok(Self::Tomorrow),
            date => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(Self::On)
                .map_err(|_| InvalidDate(value.to_string())),
        }
    }
}
