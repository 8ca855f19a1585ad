mod hourly;

use std::cmp::Reverse;

use itertools::Itertools;

pub use self::hourly::AverageHourly;
use crate::{
    core::{error::AnalysisError, point::PricePoint},
    prelude::*,
};

/// Chronological hourly price series.
///
/// The points are never reordered in place: [`PriceSeries::display_order`] returns
/// a separate view for presentation.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct PriceSeries(Vec<PricePoint>);

impl PriceSeries {
    /// Wrap the points, which must strictly increase in start time.
    pub fn try_new(points: Vec<PricePoint>) -> Result<Self, AnalysisError> {
        if let Some((previous, next)) = points
            .iter()
            .tuple_windows()
            .find(|(previous, next)| next.start_time <= previous.start_time)
        {
            return Err(AnalysisError::NotChronological {
                previous: previous.start_time,
                next: next.start_time,
            });
        }
        Ok(Self(points))
    }

    /// Append the adjacent day to the anchor day.
    pub fn try_concat(
        mut anchor: Vec<PricePoint>,
        adjacent: Vec<PricePoint>,
    ) -> Result<Self, AnalysisError> {
        anchor.extend(adjacent);
        Self::try_new(anchor)
    }

    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every point starts exactly one hour after the previous one.
    ///
    /// Measured in absolute time, so the 23- and 25-hour days still qualify.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.0
            .iter()
            .tuple_windows()
            .all(|(previous, next)| next.start_time - previous.start_time == PricePoint::DURATION)
    }

    /// Points in presentation order: chronological, or the most expensive first.
    ///
    /// Sorting is stable, equal prices keep their chronological order.
    #[must_use]
    pub fn display_order(&self, sorted: bool) -> Vec<&PricePoint> {
        let mut points = self.0.iter().collect_vec();
        if sorted {
            points.sort_by_key(|point| Reverse(point.price));
        }
        points
    }
}
