use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    core::{point::PricePoint, zone::Zone},
    prelude::*,
};

#[async_trait]
pub trait PriceProvider: Sync {
    /// Get the chronological hourly prices on the specified day.
    ///
    /// Returns an empty vector when the prices are not published (yet).
    async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<Vec<PricePoint>>;
}
