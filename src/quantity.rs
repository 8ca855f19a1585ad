#[macro_use]
mod macros;

pub mod price;
