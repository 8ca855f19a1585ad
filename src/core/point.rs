use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::quantity::price::KilowattHourPrice;

/// Hourly spot price starting at [`PricePoint::start_time`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Constructor)]
pub struct PricePoint {
    pub start_time: DateTime<FixedOffset>,
    pub price: KilowattHourPrice,
}

impl PricePoint {
    pub const DURATION: TimeDelta = TimeDelta::hours(1);

    #[must_use]
    pub fn end_time(&self) -> DateTime<FixedOffset> {
        self.start_time + Self::DURATION
    }
}
