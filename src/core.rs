pub mod error;
pub mod interval;
pub mod point;
pub mod series;
pub mod statistics;
pub mod window;
pub mod zone;
