//! Shape arguments given on the command line.
//!
//! This is the assembly edge: user input becomes concrete, validated shapes
//! here, and only `&dyn Shape` leaves this module on its way to the
//! calculator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use shapecalc_core::domain::{Circle, DomainError, Rectangle, Shape, Square};
use thiserror::Error;

/// A validated shape parsed from `KIND:DIMENSIONS`.
///
/// | Input           | Shape              |
/// |-----------------|--------------------|
/// | `rectangle:4x5` | 4 × 5 rectangle    |
/// | `circle:2`      | circle of radius 2 |
/// | `square:3`      | square of side 3   |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapeArg {
    Rectangle(Rectangle),
    Circle(Circle),
    Square(Square),
}

impl ShapeArg {
    /// Canonical kind name, as used in JSON output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
            Self::Square(_) => "square",
        }
    }

    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            Self::Rectangle(r) => r,
            Self::Circle(c) => c,
            Self::Square(s) => s,
        }
    }
}

impl fmt::Display for ShapeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle(r) => fmt::Display::fmt(r, f),
            Self::Circle(c) => fmt::Display::fmt(c, f),
            Self::Square(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Why a `KIND:DIMENSIONS` argument was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeArgError {
    #[error("expected KIND:DIMENSIONS (e.g. rectangle:4x5), got '{0}'")]
    MissingSeparator(String),

    #[error("unknown shape kind '{0}' (expected rectangle, circle, or square)")]
    UnknownKind(String),

    #[error("rectangle dimensions must be WIDTHxHEIGHT, got '{0}'")]
    MalformedRectangle(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl FromStr for ShapeArg {
    type Err = ShapeArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, dims) = s
            .split_once(':')
            .ok_or_else(|| ShapeArgError::MissingSeparator(s.to_owned()))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" | "r" => {
                let (w, h) = dims
                    .split_once(|c: char| matches!(c, 'x' | 'X' | '*'))
                    .ok_or_else(|| ShapeArgError::MalformedRectangle(dims.to_owned()))?;
                Ok(Self::Rectangle(Rectangle::new(number(w)?, number(h)?)?))
            }
            "circle" | "c" => Ok(Self::Circle(Circle::new(number(dims)?)?)),
            "square" | "sq" | "s" => Ok(Self::Square(Square::new(number(dims)?)?)),
            other => Err(ShapeArgError::UnknownKind(other.to_owned())),
        }
    }
}

fn number(raw: &str) -> Result<f64, ShapeArgError> {
    raw.trim()
        .parse()
        .map_err(|_| ShapeArgError::NotANumber(raw.trim().to_owned()))
}
