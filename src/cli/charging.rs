use std::{num::NonZeroUsize, str::FromStr};

/// Duration of the load to schedule in whole hours, for example `4h`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChargingDuration(NonZeroUsize);

impl ChargingDuration {
    #[must_use]
    pub const fn hours(self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid charging duration `{_0}`, expected a positive number of hours like `2h`, `4h` or `8h`")]
pub struct InvalidChargingDuration(#[error(not(source))] String);

impl FromStr for ChargingDuration {
    type Err = InvalidChargingDuration;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let hours = trimmed.strip_suffix(['h', 'H']).unwrap_or(trimmed);
        hours
            .parse::<NonZeroUsize>()
            .map(Self)
            .map_err(|_| InvalidChargingDuration(value.to_string()))
    }
}
