// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for shapecalc.
//!
//! This module contains pure geometry with no I/O and no observability.
//!
//! - **No async**: area computation is synchronous
//! - **No tracing**: events are emitted by the application layer only
//! - **Valid by construction**: every kind holds validated [`Dimension`]s
//! - **Open set of kinds**: consumers depend on [`Shape`], never on a kind
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::Shape;
pub use entities::{Circle, Rectangle, Square};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use value_objects::Dimension;
