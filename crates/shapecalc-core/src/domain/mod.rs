//! Shape domain model.
//!
//! Shapes are plain values: created once per calculation, never mutated, and
//! dropped once their results have been shown.

mod shape;
mod shape_kind;

pub use shape::{Length, Shape};
pub use shape_kind::ShapeKind;
