use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    api::PriceProvider,
    cli::Args,
    core::{error::AnalysisError, series::PriceSeries, statistics::Statistics, zone::Zone},
    prelude::*,
    render::Report,
};

/// Fetch the prices, compute the statistics and the cheapest windows.
///
/// Nothing is rendered here, so a failure never leaves a partial report behind.
#[instrument(skip_all)]
pub async fn analyze(
    args: &Args,
    provider: &dyn PriceProvider,
    today: NaiveDate,
) -> Result<Report> {
    let (anchor, adjacent) = args.date.resolve(today)?;
    let series = fetch_series(provider, anchor, adjacent, args.zone).await?;
    info!(len = series.len(), "built the price series");

    let statistics = Statistics::try_from_series(&series)?;
    let windows = if series.is_contiguous() {
        args.window_hours()
            .into_iter()
            .filter_map(|hours| {
                let window = series.find_cheapest_window(hours);
                if window.is_none() {
                    warn!(hours, len = series.len(), "the series is too short, skipping");
                }
                window
            })
            .collect_vec()
    } else {
        warn!(len = series.len(), "the series has gaps, skipping all windows");
        Vec::new()
    };

    Ok(Report::builder()
        .date(anchor)
        .zone(args.zone)
        .sorted(args.sorted)
        .series(series)
        .statistics(statistics)
        .windows(windows)
        .build())
}

/// Fetch the anchor day and append the adjacent one when it is available.
#[instrument(skip_all, fields(anchor = %anchor, zone = %zone))]
async fn fetch_series(
    provider: &dyn PriceProvider,
    anchor: NaiveDate,
    adjacent: NaiveDate,
    zone: Zone,
) -> Result<PriceSeries> {
    let anchor_points = provider.get_prices(anchor, zone).await?;
    if anchor_points.is_empty() {
        return Err(AnalysisError::NoData { on: anchor, zone }.into());
    }

    let adjacent_points = provider.get_prices(adjacent, zone).await.unwrap_or_else(|error| {
        warn!(%adjacent, "failed to fetch the adjacent day, skipping: {error:#}");
        Vec::new()
    });
    if adjacent_points.is_empty() {
        info!(%adjacent, "no prices for the adjacent day");
    }

    Ok(PriceSeries::try_concat(anchor_points, adjacent_points)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_abs_diff_eq;
    use async_trait::async_trait;
    use chrono::Timelike;
    use clap::Parser;

    use super::*;
    use crate::core::{point::PricePoint, series::testing::points_of};

    /// 2025-01-15, the first day of [`points_of`].
    const ANCHOR_DATE: NaiveDate = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    const TODAY: NaiveDate = ANCHOR_DATE;

    struct FixedPrices(HashMap<NaiveDate, Vec<PricePoint>>);

    impl FixedPrices {
        fn new(anchor: Vec<PricePoint>, adjacent: Vec<PricePoint>) -> Self {
            let next_date = ANCHOR_DATE.succ_opt().unwrap();
            Self(HashMap::from([(ANCHOR_DATE, anchor), (next_date, adjacent)]))
        }
    }

    #[async_trait]
    impl PriceProvider for FixedPrices {
        async fn get_prices(&self, on: NaiveDate, _zone: Zone) -> Result<Vec<PricePoint>> {
            Ok(self.0.get(&on).cloned().unwrap_or_default())
        }
    }

    /// Only knows the anchor day and fails on everything else.
    struct FlakyNextDay(Vec<PricePoint>);

    #[async_trait]
    impl PriceProvider for FlakyNextDay {
        async fn get_prices(&self, on: NaiveDate, _zone: Zone) -> Result<Vec<PricePoint>> {
            ensure!(on == ANCHOR_DATE, "connection reset");
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_analyze_end_to_end() -> Result {
        let provider = FixedPrices::new(points_of(0, &[2.0, 1.0, 3.0, 1.5]), Vec::new());
        let args = Args::parse_from(["elpris", "--charging", "2h"]);
        let report = analyze(&args, &provider, TODAY).await?;

        assert_eq!(report.date, ANCHOR_DATE);
        assert_eq!(report.series.len(), 4);
        assert_abs_diff_eq!(report.statistics.mean.0, 1.875);
        assert_eq!(report.statistics.cheapest.start_time.hour(), 1);
        assert_eq!(report.statistics.priciest.start_time.hour(), 2);

        assert_eq!(report.windows.len(), 1);
        let window = report.windows[0];
        assert_eq!(window.start_index, 0);
        assert_abs_diff_eq!(window.sum.0, 3.0);
        let interval = window.interval(&report.series);
        assert_eq!(interval.start.hour(), 0);
        assert_eq!(interval.end.hour(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_appends_next_day() -> Result {
        let provider = FixedPrices::new(points_of(0, &[0.5; 24]), points_of(24, &[0.1; 24]));
        let args = Args::parse_from(["elpris"]);
        let report = analyze(&args, &provider, TODAY).await?;
        assert_eq!(report.series.len(), 48);
        assert!(report.series.is_contiguous());
        let start_indices = report.windows.iter().map(|window| window.start_index).collect_vec();
        assert_eq!(start_indices, [24, 24, 24]);
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_today_before_tomorrow_is_published() -> Result {
        let provider = FixedPrices::new(points_of(0, &[1.0; 24]), Vec::new());
        let report = analyze(&Args::parse_from(["elpris"]), &provider, TODAY).await?;
        assert_eq!(report.date, TODAY);
        assert_eq!(report.series.len(), 24);
        assert_eq!(report.windows.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_explicit_date_ignores_today() -> Result {
        let provider = FixedPrices::new(points_of(0, &[1.0, 2.0]), points_of(24, &[0.5]));
        let args = Args::parse_from(["elpris", "--date", "2025-01-15"]);
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let report = analyze(&args, &provider, today).await?;
        assert_eq!(report.date, ANCHOR_DATE);
        assert_eq!(report.series.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_series_with_gaps_has_no_windows() -> Result {
        let provider = FixedPrices::new(points_of(0, &[1.0, 2.0, 3.0]), points_of(24, &[1.0; 24]));
        let report = analyze(&Args::parse_from(["elpris"]), &provider, TODAY).await?;
        assert_eq!(report.series.len(), 27);
        assert!(report.windows.is_empty());
        assert_abs_diff_eq!(report.statistics.mean.0, 30.0 / 27.0, epsilon = 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_skips_long_windows() -> Result {
        let provider = FixedPrices::new(points_of(0, &[1.0, 2.0, 3.0, 4.0, 5.0]), Vec::new());
        let args = Args::parse_from(["elpris", "--date", "2025-01-15"]);
        let report = analyze(&args, &provider, NaiveDate::MIN).await?;
        assert_eq!(report.windows.iter().map(|window| window.hours).collect_vec(), [2, 4]);
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_sorted_keeps_windows() -> Result {
        let prices = [0.9, 0.3, 0.2, 0.8, 0.1, 0.7, 0.6, 0.5, 0.4, 1.0];
        let provider = FixedPrices::new(points_of(0, &prices), Vec::new());
        let unsorted = analyze(&Args::parse_from(["elpris"]), &provider, TODAY).await?;
        let sorted = analyze(&Args::parse_from(["elpris", "--sorted"]), &provider, TODAY).await?;
        assert_eq!(unsorted.windows, sorted.windows);
        assert_eq!(unsorted.series.points(), sorted.series.points());
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_no_data() {
        let provider = FixedPrices::new(Vec::new(), points_of(24, &[1.0]));
        let error = analyze(&Args::parse_from(["elpris"]), &provider, TODAY).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::NoData { on, zone: Zone::Se3 }) if *on == ANCHOR_DATE
        ));
    }

    #[tokio::test]
    async fn test_fetch_series_tolerates_next_day_failure() -> Result {
        let provider = FlakyNextDay(points_of(0, &[1.0, 2.0]));
        let next_date = ANCHOR_DATE.succ_opt().unwrap();
        let series = fetch_series(&provider, ANCHOR_DATE, next_date, Zone::Se3).await?;
        assert_eq!(series.len(), 2);
        Ok(())
    }
}
