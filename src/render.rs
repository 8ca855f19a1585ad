use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::core::{series::PriceSeries, statistics::Statistics, window::Window, zone::Zone};

/// Console report: the hourly listing, the statistics, and the cheapest windows.
#[derive(Debug, bon::Builder)]
#[must_use]
pub struct Report {
    pub date: NaiveDate,
    pub zone: Zone,

    /// List the hourly prices from the most to the least expensive.
    pub sorted: bool,

    pub series: PriceSeries,
    pub statistics: Statistics,

    /// Found in [`Report::series`], in the report order.
    pub windows: Vec<Window>,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for point in self.series.display_order(self.sorted) {
            writeln!(f, "{}: {}", hh_mm(point.start_time), point.price.to_display_unit())?;
        }

        writeln!(f, "Statistics")?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Zone: {}", self.zone)?;
        writeln!(f, "Mean: {}", self.statistics.mean.to_display_unit())?;
        writeln!(
            f,
            "Cheapest: {} {}",
            hh_mm(self.statistics.cheapest.start_time),
            self.statistics.cheapest.price.to_display_unit(),
        )?;
        writeln!(
            f,
            "Priciest: {} {}",
            hh_mm(self.statistics.priciest.start_time),
            self.statistics.priciest.price.to_display_unit(),
        )?;

        for window in &self.windows {
            let interval = window.interval(&self.series);
            writeln!(
                f,
                "Cheapest price for {}h window: {}–{} ({})",
                window.hours,
                hh_mm(interval.start),
                hh_mm(interval.end),
                window.sum.to_display_unit(),
            )?;
        }

        Ok(())
    }
}

fn hh_mm(time: DateTime<FixedOffset>) -> impl Display {
    time.format("%H:%M")
}
