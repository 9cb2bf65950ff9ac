use std::f64::consts::PI;
use std::fmt;

use super::ShapeKind;
use crate::errors::ShapeError;

/// A strictly positive length in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    pub fn new(value: f64) -> Result<Self, ShapeError> {
        // NaN fails the comparison as well.
        if value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ShapeError::NonPositiveLength { length: value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Length {
    type Error = ShapeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Length::new(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A shape defined by a single length.
///
/// The circle is defined by its diameter; the square and the equilateral
/// triangle by their side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { diameter: Length },
    Square { side: Length },
    Triangle { side: Length },
}

impl Shape {
    pub fn circle(diameter: f64) -> Result<Self, ShapeError> {
        Ok(Shape::Circle {
            diameter: Length::new(diameter)?,
        })
    }

    pub fn square(side: f64) -> Result<Self, ShapeError> {
        Ok(Shape::Square {
            side: Length::new(side)?,
        })
    }

    pub fn triangle(side: f64) -> Result<Self, ShapeError> {
        Ok(Shape::Triangle {
            side: Length::new(side)?,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// The defining length: diameter for a circle, side otherwise.
    pub fn length(&self) -> f64 {
        match self {
            Shape::Circle { diameter } => diameter.get(),
            Shape::Square { side } | Shape::Triangle { side } => side.get(),
        }
    }

    pub fn area(&self) -> f64 {
        let length = self.length();
        match self {
            Shape::Circle { .. } => {
                let radius = length / 2.0;
                PI * radius.powi(2)
            }
            Shape::Square { .. } => length.powi(2),
            Shape::Triangle { .. } => (3f64.sqrt() / 4.0) * length.powi(2),
        }
    }

    pub fn boundary_length(&self) -> f64 {
        let length = self.length();
        match self {
            Shape::Circle { .. } => PI * length,
            Shape::Square { .. } => length * 4.0,
            Shape::Triangle { .. } => length * 3.0,
        }
    }
}
