use std::io;

use shapecalc_core::{Shape, ShapeKind};
use strum::IntoEnumIterator;

use super::formatter::{center, format_area, format_length};
use crate::domain::models::ColorTag;
use crate::infrastructure::console::Console;

const BORDER_CHAR: char = '=';
const DIVIDER_CHAR: char = '-';
const HEADER_TEXT: &str = "Shape Calculator App";
const FOOTER_TEXT: &str = "Thank you for using the Shape Calculator App!";
const MENU_TITLE: &str = "Shape Menu";
const MENU_PROMPT: &str = "Enter your choice: ";
const CONTINUE_PROMPT: &str = "\nCalculate another shape? (y/n): ";

/// Width shared by the banners and the menu divider.
pub const SECTION_WIDTH: usize = FOOTER_TEXT.len() + 8;

/// Renders banners, the shape menu, results and the continue prompt.
pub struct ConsoleUi<C> {
    console: C,
}

impl<C: Console> ConsoleUi<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn show_header(&mut self) -> io::Result<()> {
        self.write_section(&center(HEADER_TEXT, SECTION_WIDTH), ColorTag::Header)
    }

    pub fn show_footer(&mut self) -> io::Result<()> {
        self.write_section(&center(FOOTER_TEXT, SECTION_WIDTH), ColorTag::Footer)
    }

    pub fn show_shape_menu(&mut self) -> io::Result<()> {
        let title = format!("\n{}", center(MENU_TITLE, SECTION_WIDTH));
        self.console.write_line_tagged(&title, ColorTag::Header)?;
        self.console
            .write_line_tagged(&divider(SECTION_WIDTH), ColorTag::Header)?;

        self.console
            .write_line_tagged("  Key    |   Shape", ColorTag::Prompt)?;
        self.console
            .write_line_tagged("---------+-------------------------", ColorTag::Prompt)?;
        for kind in ShapeKind::iter() {
            let row = format!("   {}     |   {}", kind.key(), kind.label());
            self.console.write_line_tagged(&row, ColorTag::Prompt)?;
        }
        self.console.write_line_tagged("", ColorTag::Prompt)?;

        self.console.write_tagged(MENU_PROMPT, ColorTag::Input)
    }

    pub fn show_invalid_selection_message(&mut self) -> io::Result<()> {
        self.console
            .write_line_tagged("Invalid selection. Try again.", ColorTag::Error)
    }

    pub fn show_shape_results(&mut self, shape: &Shape) -> io::Result<()> {
        let lines = [
            format!("\nLength: {}", format_length(shape.length())),
            format!("Area: {}", format_area(shape.area())),
            format!("Boundary Length: {}", format_length(shape.boundary_length())),
        ];
        for line in &lines {
            self.console.write_line_tagged(line, ColorTag::Result)?;
        }
        Ok(())
    }

    /// Asks whether to run another calculation until the answer is `y` or `n`.
    pub fn ask_to_continue(&mut self) -> io::Result<bool> {
        loop {
            self.console.write_tagged(CONTINUE_PROMPT, ColorTag::Input)?;
            let input = self
                .console
                .read_input(ColorTag::Input)?
                .unwrap_or_default()
                .trim()
                .to_lowercase();

            match input.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    log::debug!("Unrecognised continue answer: {:?}", input);
                    self.console
                        .write_line_tagged("Please enter 'y' or 'n'.", ColorTag::Error)?;
                }
            }
        }
    }

    /// Writes a blank line in the default style.
    pub fn show_blank_line(&mut self) -> io::Result<()> {
        self.console.write_line("")
    }

    fn write_section(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        let border = BORDER_CHAR.to_string().repeat(SECTION_WIDTH);
        self.console.write_line_tagged(&border, tag)?;
        self.console.write_line_tagged(text, tag)?;
        self.console.write_line_tagged(&border, tag)
    }
}

fn divider(width: usize) -> String {
    DIVIDER_CHAR.to_string().repeat(width)
}
