use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::core::zone::Zone;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("no prices available for {on} in zone {zone}")]
    NoData { on: NaiveDate, zone: Zone },

    #[display("prices are not in chronological order: {previous} is followed by {next}")]
    NotChronological { previous: DateTime<FixedOffset>, next: DateTime<FixedOffset> },

    #[display("the price series is empty")]
    EmptySeries,
}
