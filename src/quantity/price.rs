quantity!(
    /// Spot price in Swedish kronor per kilowatt-hour.
    KilowattHourPrice, via: f64, suffix: "SEK/kWh", precision: 4
);

quantity!(
    /// [Öre][1] per kilowatt-hour, one-hundredth of [`KilowattHourPrice`].
    ///
    /// [1]: https://en.wikipedia.org/wiki/Swedish_krona
    OrePerKilowattHour, via: f64, suffix: "öre/kWh", precision: 2
);

impl KilowattHourPrice {
    /// Convert to öre and round to two decimals, ties away from zero.
    ///
    /// The price is snapped onto a whole number of 1e-8 SEK first, so that the binary
    /// representation of a price like `0.12345` cannot push it across the tie.
    pub fn to_display_unit(self) -> OrePerKilowattHour {
        let hundred_millionths = (self.0 * 1e8).round();
        OrePerKilowattHour((hundred_millionths / 1e4).round() / 100.0)
    }
}
