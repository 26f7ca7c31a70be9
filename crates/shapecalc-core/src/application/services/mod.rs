//! Application services - consumers of the domain capabilities.

pub mod area_calculator;

pub use area_calculator::AreaCalculator;
