pub mod elpriset;
mod provider;

pub use self::provider::PriceProvider;
