mod analyze;
mod charging;
mod date;

use clap::Parser;
use reqwest::Url;

pub use self::{analyze::analyze, charging::ChargingDuration, date::DateArg};
use crate::core::zone::Zone;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// `YYYY-MM-DD` to analyze that date, or `today`/`tomorrow` to analyze today.
    /// The next day is appended when its prices are published.
    #[clap(long, default_value = "tomorrow", env = "ELPRIS_DATE")]
    pub date: DateArg,

    /// List the hourly prices from the most to the least expensive.
    #[clap(long)]
    pub sorted: bool,

    /// Only report the cheapest window of this duration, for example `4h`.
    ///
    /// By default, the 2, 4, and 8-hour windows are reported.
    #[clap(long, env = "ELPRIS_CHARGING")]
    pub charging: Option<ChargingDuration>,

    /// Price zone.
    #[clap(long, default_value = "SE3", env = "ELPRIS_ZONE", ignore_case = true)]
    pub zone: Zone,

    /// Base URL of the price API.
    #[clap(
        long = "api-base-url",
        default_value = crate::api::elpriset::DEFAULT_BASE_URL,
        env = "ELPRIS_API_BASE_URL"
    )]
    pub api_base_url: Url,
}

impl Args {
    const DEFAULT_WINDOW_HOURS: [usize; 3] = [2, 4, 8];

    /// Window durations to report, in the report order.
    #[must_use]
    pub fn window_hours(&self) -> Vec<usize> {
        self.charging
            .map_or_else(|| Self::DEFAULT_WINDOW_HOURS.to_vec(), |charging| vec![charging.hours()])
    }
}
