use crate::{
    core::{error::AnalysisError, point::PricePoint, series::PriceSeries},
    quantity::price::KilowattHourPrice,
};

#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct Statistics {
    pub mean: KilowattHourPrice,

    /// The first point with the lowest price.
    pub cheapest: PricePoint,

    /// The first point with the highest price.
    pub priciest: PricePoint,
}

impl Statistics {
    pub fn try_from_series(series: &PriceSeries) -> Result<Self, AnalysisError> {
        let (first, rest) = series.points().split_first().ok_or(AnalysisError::EmptySeries)?;
        let mut total = first.price;
        let mut cheapest = *first;
        let mut priciest = *first;
        for point in rest {
            total += point.price;
            // Strict comparisons keep the earliest point on ties:
            if point.price < cheapest.price {
                cheapest = *point;
            }
            if point.price > priciest.price {
                priciest = *point;
            }
        }
        #[expect(clippy::cast_precision_loss)]
        let mean = total / series.len() as f64;
        Ok(Self { mean, cheapest, priciest })
    }
}
