use shapecalc_core::ShapeError;
use thiserror::Error;

/// Failures that end an interactive session.
///
/// Neither variant is recovered from: a console failure means the session can
/// no longer talk to the user, and a shape error means validated input was
/// rejected by the factory.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Shape construction failed: {0}")]
    Shape(#[from] ShapeError),
}
