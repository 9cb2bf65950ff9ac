//! Interpretation of user input for shape selection and lengths
//!
//! Invalid input is never an error here. The shape prompt reports "no
//! selection" and lets the caller decide what to do; the length prompt explains
//! what was wrong and asks again until it gets a usable value. Only failures of
//! the console itself escape.

use std::io;

use shapecalc_core::ShapeKind;
use thiserror::Error;

use crate::domain::models::ColorTag;
use crate::infrastructure::console::Console;

pub const MIN_LENGTH: f64 = 0.01;
pub const MAX_LENGTH: f64 = 10000.0;

const LENGTH_PROMPT: &str = "Enter the length: ";

/// Why a length entry was rejected. The display text is shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthInputError {
    #[error("Invalid input. Please enter a numeric value.")]
    NotNumeric,
    #[error(
        "Invalid length. Please enter a value between {min} and {max} cm.",
        min = MIN_LENGTH,
        max = MAX_LENGTH
    )]
    OutOfRange,
}

/// Maps a raw menu answer to a shape kind; anything but a lone key is `None`.
pub fn parse_shape_key(input: Option<&str>) -> Option<ShapeKind> {
    let key = input.unwrap_or_default().trim().to_lowercase();
    ShapeKind::from_key(&key)
}

/// Parses a length entry, accepting a comma as the decimal separator.
pub fn parse_length(input: Option<&str>) -> Result<f64, LengthInputError> {
    let normalized = input.unwrap_or_default().trim().replace(',', ".");
    let value = normalized
        .parse::<f64>()
        .map_err(|_| LengthInputError::NotNumeric)?;

    if (MIN_LENGTH..=MAX_LENGTH).contains(&value) {
        Ok(value)
    } else {
        Err(LengthInputError::OutOfRange)
    }
}

pub struct ShapeInputHandler<C> {
    console: C,
}

impl<C: Console> ShapeInputHandler<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Reads one menu answer. Unrecognised answers yield `Ok(None)`.
    pub fn read_shape_kind(&mut self) -> io::Result<Option<ShapeKind>> {
        let input = self.console.read_input(ColorTag::Input)?;
        let kind = parse_shape_key(input.as_deref());
        if kind.is_none() {
            log::debug!("Unrecognised shape selection: {:?}", input);
        }
        Ok(kind)
    }

    /// Prompts until a length within range is entered.
    pub fn read_length(&mut self) -> io::Result<f64> {
        loop {
            self.console.write_tagged(LENGTH_PROMPT, ColorTag::Input)?;
            let input = self.console.read_input(ColorTag::Input)?;

            match parse_length(input.as_deref()) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("Rejected length {:?}: {:?}", input, err);
                    self.show_error(&err)?;
                }
            }
        }
    }

    fn show_error(&mut self, err: &LengthInputError) -> io::Result<()> {
        self.console
            .write_line_tagged(&format!("Error: {}", err), ColorTag::Error)
    }
}
