//! Construction of shapes from a user selection
//!
//! The factory is the single place where a selected kind and a raw length meet.
//! Length validation always runs first, so a non-positive length is reported the
//! same way whatever kind was asked for.

use crate::domain::{Length, Shape, ShapeKind};
use crate::errors::ShapeError;

pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create(kind: ShapeKind, length: f64) -> Result<Shape, ShapeError> {
        let length = Length::new(length)?;
        Ok(Self::build(kind, length))
    }

    /// Creates a shape from a kind name such as `"circle"` or `"Square"`.
    ///
    /// Unknown names fail with [`ShapeError::UnsupportedKind`], but only after
    /// the length has been validated.
    pub fn create_named(kind: &str, length: f64) -> Result<Shape, ShapeError> {
        let length = Length::new(length)?;
        let kind = kind
            .trim()
            .parse::<ShapeKind>()
            .map_err(|_| ShapeError::UnsupportedKind {
                kind: kind.to_string(),
            })?;
        Ok(Self::build(kind, length))
    }

    fn build(kind: ShapeKind, length: Length) -> Shape {
        let shape = match kind {
            ShapeKind::Circle => Shape::Circle { diameter: length },
            ShapeKind::Square => Shape::Square { side: length },
            ShapeKind::Triangle => Shape::Triangle { side: length },
        };
        log::debug!("Created {} with length {}", kind, length);
        shape
    }
}
