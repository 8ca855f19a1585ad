//! [Elpriset just nu](https://www.elprisetjustnu.se/elpris-api) client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{
    api::PriceProvider,
    core::{point::PricePoint, series::AverageHourly, zone::Zone},
    prelude::*,
    quantity::price::KilowattHourPrice,
};

pub const DEFAULT_BASE_URL: &str = "https://www.elprisetjustnu.se/api/v1/prices";

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, base_url })
    }

    /// For example, `…/prices/2025/01-15_SE3.json`.
    fn prices_url(&self, on: NaiveDate, zone: Zone) -> Result<Url> {
        let url = format!(
            "{}/{}_{zone}.json",
            self.base_url.as_str().trim_end_matches('/'),
            on.format("%Y/%m-%d"),
        );
        Url::parse(&url).with_context(|| format!("invalid prices URL: `{url}`"))
    }
}

#[async_trait]
impl PriceProvider for Api {
    #[instrument(skip_all, fields(on = %on, zone = %zone))]
    async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<Vec<PricePoint>> {
        info!("fetching…");
        let response = self
            .client
            .get(self.prices_url(on, zone)?)
            .send()
            .await
            .context("failed to call")?;
        if response.status() == StatusCode::NOT_FOUND {
            info!("not published yet");
            return Ok(Vec::new());
        }
        let entries = response
            .error_for_status()
            .context("request failed")?
            .json::<Vec<Entry>>()
            .await
            .context("failed to deserialize the response")?;
        info!(n_entries = entries.len(), "fetched");
        Entry::into_hourly(entries)
    }
}

#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "SEK_per_kWh")]
    price: KilowattHourPrice,

    time_start: DateTime<FixedOffset>,
}

impl Entry {
    /// The API publishes quarter-hourly prices since October 2025.
    fn into_hourly(entries: Vec<Self>) -> Result<Vec<PricePoint>> {
        entries.into_iter().map(|entry| (entry.time_start, entry.price)).average_hourly()
    }
}
