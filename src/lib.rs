//! Summing numeric slices of any single element type as `f64`.

pub mod driver;
pub mod logging;
pub mod numeric;
pub mod ops;

pub use numeric::Numeric;
pub use ops::sum;
