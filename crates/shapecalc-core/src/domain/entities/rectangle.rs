//! Rectangle entity.
//!
//! Width and height are independent: each setter validates and applies only
//! its own dimension. Any kind that needs to lock its sides together (a
//! square) is a separate peer type, not a specialization of this one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::finite_area;
use crate::domain::{
    capabilities::Shape,
    error::{DomainError, DomainResult},
    value_objects::Dimension,
};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleFields")]
pub struct Rectangle {
    width: Dimension,
    height: Dimension,
}

/// Unvalidated wire form, checked through [`Rectangle::new`].
#[derive(Deserialize)]
struct RectangleFields {
    width: f64,
    height: f64,
}

impl TryFrom<RectangleFields> for Rectangle {
    type Error = DomainError;

    fn try_from(fields: RectangleFields) -> DomainResult<Self> {
        Self::new(fields.width, fields.height)
    }
}

impl Rectangle {
    /// Create a rectangle, rejecting any non-positive or non-finite side and
    /// any pair whose area overflows.
    pub fn new(width: f64, height: f64) -> DomainResult<Self> {
        let rectangle = Self {
            width: Dimension::new("width", width)?,
            height: Dimension::new("height", height)?,
        };
        finite_area(rectangle, "height", height)
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Change the width. On error the rectangle is left untouched.
    pub fn set_width(&mut self, width: f64) -> DomainResult<()> {
        let resized = Self {
            width: Dimension::new("width", width)?,
            ..*self
        };
        *self = finite_area(resized, "width", width)?;
        Ok(())
    }

    /// Change the height. On error the rectangle is left untouched.
    pub fn set_height(&mut self, height: f64) -> DomainResult<()> {
        let resized = Self {
            height: Dimension::new("height", height)?,
            ..*self
        };
        *self = finite_area(resized, "height", height)?;
        Ok(())
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width.get() * self.height.get()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rectangle {} x {}", self.width, self.height)
    }
}
