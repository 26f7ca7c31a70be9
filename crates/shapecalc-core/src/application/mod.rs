//! Application layer for shapecalc.
//!
//! This layer contains the **services** that consume the domain's `Shape`
//! capability. It adds observability but no geometry of its own: all area
//! rules live in `crate::domain`.

pub mod services;

pub use services::AreaCalculator;
