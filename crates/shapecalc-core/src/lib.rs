//! Shapecalc Core - Extensible Area Computation
//!
//! This crate provides the domain and application layers for the shapecalc
//! tool. Consumers depend on the [`Shape`](domain::Shape) capability, never
//! on a concrete kind.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          shapecalc-cli (CLI)            │
//! │  (Assembles concrete shapes from input) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (AreaCalculator)             │
//! │      Depends on the capability only     │
//! └──────────────────┬──────────────────────┘
//!                    │ invokes
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Shape, Rectangle, Circle, Square,     │
//! │   Dimension, DomainError)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapecalc_core::prelude::*;
//!
//! let calculator = AreaCalculator::new();
//!
//! let rectangle = Rectangle::new(4.0, 5.0).unwrap();
//! assert_eq!(calculator.calculate_area(&rectangle), 20.0);
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![
//!     Box::new(rectangle),
//!     Box::new(Square::new(3.0).unwrap()),
//! ];
//! assert_eq!(calculator.total_area(&shapes), 29.0);
//! ```
//!
//! ## Adding a new kind
//!
//! Implement [`Shape`](domain::Shape) for your type. Nothing in this crate
//! changes.
//!
//! ```rust
//! use shapecalc_core::prelude::*;
//!
//! struct Ellipse {
//!     a: Dimension,
//!     b: Dimension,
//! }
//!
//! impl Shape for Ellipse {
//!     fn area(&self) -> f64 {
//!         std::f64::consts::PI * self.a.get() * self.b.get()
//!     }
//! }
//!
//! let ellipse = Ellipse {
//!     a: Dimension::new("a", 1.0).unwrap(),
//!     b: Dimension::new("b", 2.0).unwrap(),
//! };
//! let area = AreaCalculator::new().calculate_area(&ellipse);
//! assert!((area - 2.0 * std::f64::consts::PI).abs() < 1e-12);
//! ```

// Domain layer (capability, kinds, validation)
pub mod domain;

// Application layer (consumers of the capability)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::AreaCalculator;
    pub use crate::domain::{
        Circle, Dimension, DomainError, DomainResult, ErrorCategory, Rectangle, Shape, Square,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
