//! Console front end for the shape calculator.
//!
//! This crate turns the geometry core into an interactive session: it renders
//! the banner and menu, reads a shape selection and a length through a
//! pluggable console, prints unit-aware results and asks whether to go again.
//! Every component receives its console explicitly, so the whole session can be
//! driven from an in-memory script in tests.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod errors;
pub mod infrastructure;

pub use application::{ConsoleUi, ShapeCalculatorApp};
pub use configuration::{ColorMode, Config};
pub use domain::models::ColorTag;
pub use domain::services::{LengthInputError, ShapeInputHandler};
pub use errors::AppError;
pub use infrastructure::console::{Console, ScriptedConsole, TerminalConsole, Written};
