use chrono::{DateTime, DurationRound, FixedOffset};

use crate::{core::point::PricePoint, prelude::*, quantity::price::KilowattHourPrice};

impl<T> AverageHourly for T where T: ?Sized {}

pub trait AverageHourly {
    /// Collapse consecutive prices that start within the same hour into their mean.
    ///
    /// Hourly input passes through unchanged.
    fn average_hourly(self) -> Result<Vec<PricePoint>>
    where
        Self: Sized + IntoIterator<Item = (DateTime<FixedOffset>, KilowattHourPrice)>,
    {
        let mut points: Vec<PricePoint> = Vec::new();
        let mut n_samples = 0_u32;
        for (start_time, price) in self {
            let hour = start_time.duration_trunc(PricePoint::DURATION)?;
            match points.last_mut() {
                Some(last) if last.start_time == hour => {
                    // Running mean:
                    n_samples += 1;
                    last.price += (price - last.price) / f64::from(n_samples);
                }
                _ => {
                    points.push(PricePoint::new(hour, price));
                    n_samples = 1;
                }
            }
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeDelta, TimeZone, Timelike};

    use super::*;

    #[test]
    fn test_average_hourly_quarters() -> Result {
        let start = FixedOffset::east_opt(7200)
            .unwrap()
            .with_ymd_and_hms(2025, 10, 1, 0, 0, 0)
            .unwrap();
        let prices = [0.1, 0.2, 0.3, 0.4, 1.0, 1.0, 1.0, 1.0];
        let points = (0..)
            .zip(prices)
            .map(|(index, price)| {
                (start + TimeDelta::minutes(15) * index, KilowattHourPrice(price))
            })
            .average_hourly()?;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].start_time, start);
        assert_abs_diff_eq!(points[0].price.0, 0.25, epsilon = 1e-9);
        assert_eq!(points[1].start_time.hour(), 1);
        assert_abs_diff_eq!(points[1].price.0, 1.0);
        Ok(())
    }

    #[test]
    fn test_average_hourly_passes_hourly_through() -> Result {
        let start = FixedOffset::east_opt(7200)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
            .unwrap();
        let points = [
            (start, KilowattHourPrice(0.5)),
            (start + PricePoint::DURATION, KilowattHourPrice(0.7)),
        ]
        .average_hourly()?;
        assert_eq!(points.len(), 2);
        assert_abs_diff_eq!(points[1].price.0, 0.7);
        Ok(())
    }
}
