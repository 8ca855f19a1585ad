use crate::{
    core::{interval::Interval, series::PriceSeries},
    quantity::price::KilowattHourPrice,
};

/// Contiguous block of hours within a [`PriceSeries`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Window {
    pub start_index: usize,
    pub hours: usize,

    /// Sum of the hourly prices within the window.
    pub sum: KilowattHourPrice,
}

impl Window {
    /// Time span from the start of the first hour till the end of the last one.
    ///
    /// The window must have been found in the same series.
    pub fn interval(&self, series: &PriceSeries) -> Interval {
        let points = &series.points()[self.start_index..self.start_index + self.hours];
        Interval::new(points[0].start_time, points[self.hours - 1].end_time())
    }
}

impl PriceSeries {
    /// Find the contiguous block of `hours` points with the lowest total price.
    ///
    /// The earliest window wins ties. Returns [`None`] when the series is too short,
    /// `hours` is zero, or the series has gaps.
    #[must_use]
    pub fn find_cheapest_window(&self, hours: usize) -> Option<Window> {
        if hours == 0 || self.len() < hours || !self.is_contiguous() {
            return None;
        }
        self.points()
            .windows(hours)
            .enumerate()
            .map(|(start_index, points)| Window {
                start_index,
                hours,
                sum: points.iter().map(|point| point.price).sum(),
            })
            .reduce(|best, window| if window.sum < best.sum { window } else { best })
    }
}
