//! Square entity.
//!
//! Deliberately unrelated to [`Rectangle`](super::Rectangle): a square has
//! one side, so there is no width/height pair whose setters could disagree.
//! Both kinds meet only through the `Shape` capability.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::finite_area;
use crate::domain::{
    capabilities::Shape,
    error::{DomainError, DomainResult},
    value_objects::Dimension,
};

/// A square described by its side length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SquareFields")]
pub struct Square {
    side: Dimension,
}

#[derive(Deserialize)]
struct SquareFields {
    side: f64,
}

impl TryFrom<SquareFields> for Square {
    type Error = DomainError;

    fn try_from(fields: SquareFields) -> DomainResult<Self> {
        Self::new(fields.side)
    }
}

impl Square {
    pub fn new(side: f64) -> DomainResult<Self> {
        let square = Self {
            side: Dimension::new("side", side)?,
        };
        finite_area(square, "side", side)
    }

    pub fn side(&self) -> f64 {
        self.side.get()
    }

    pub fn set_side(&mut self, side: f64) -> DomainResult<()> {
        *self = Self::new(side)?;
        Ok(())
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        let s = self.side.get();
        s * s
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square {}", self.side)
    }
}
