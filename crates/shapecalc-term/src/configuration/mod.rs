//! Runtime configuration for the console front end.
//!
//! Settings come only from command-line flags; nothing is read from files or
//! the environment.

mod config;

pub use config::*;
