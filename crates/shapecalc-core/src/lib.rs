//! Geometry core for the shape calculator.
//!
//! This crate holds the pure part of the application: the closed set of
//! supported shapes, the validated length they are built from, and the factory
//! that turns a user selection into a shape. Nothing here performs I/O, so the
//! whole crate can be exercised directly from tests.
//!
//! # Overview
//!
//! - **Domain model**: [`Shape`] is a sum type over circle, square and
//!   equilateral triangle, each carrying a strictly positive [`Length`]
//! - **Factory**: [`ShapeFactory`] validates the length before dispatching on
//!   the selected [`ShapeKind`]
//! - **Errors**: [`ShapeError`] describes the two ways construction can fail

pub mod domain;
pub mod errors;
pub mod factory;

pub use domain::{Length, Shape, ShapeKind};
pub use errors::ShapeError;
pub use factory::ShapeFactory;
