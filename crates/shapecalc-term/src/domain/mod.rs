//! Console-independent models and input services.
//!
//! The services here decide what a line of user input means; they never decide
//! how it is displayed.

pub mod models;
pub mod services;
