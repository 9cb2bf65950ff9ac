//! Session rendering and the interactive loop.

mod app;
pub mod formatter;
mod ui;

pub use app::ShapeCalculatorApp;
pub use ui::{ConsoleUi, SECTION_WIDTH};
