//! Bindings to the outside world.
//!
//! Currently only the console: a terminal-backed implementation for real use
//! and a scripted one for driving sessions in tests.

pub mod console;
