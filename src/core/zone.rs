/// Swedish bidding zone.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, derive_more::Display)]
pub enum Zone {
    /// Luleå, northern Sweden.
    #[value(name = "SE1")]
    #[display("SE1")]
    Se1,

    /// Sundsvall, northern central Sweden.
    #[value(name = "SE2")]
    #[display("SE2")]
    Se2,

    /// Stockholm, southern central Sweden.
    #[value(name = "SE3")]
    #[display("SE3")]
    Se3,

    /// Malmö, southern Sweden.
    #[value(name = "SE4")]
    #[display("SE4")]
    Se4,
}
