//! Error types raised while constructing shapes
//!
//! Both variants are terminal for the construction that raised them. Callers
//! are expected to validate user input upstream, so these errors indicate a
//! programming mistake rather than something to recover from interactively.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Length must be positive. (Parameter 'length', actual value: {length})")]
    NonPositiveLength { length: f64 },
    #[error("Shape type '{kind}' is not supported.")]
    UnsupportedKind { kind: String },
}
