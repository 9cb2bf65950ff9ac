//! Interactive calculation loop
//!
//! One session shows the header once, then cycles through menu, selection,
//! length entry and results until the user declines to continue. An invalid
//! selection goes straight back to the menu without asking to continue.

use shapecalc_core::ShapeFactory;

use super::ConsoleUi;
use crate::domain::services::ShapeInputHandler;
use crate::errors::AppError;
use crate::infrastructure::console::Console;

pub struct ShapeCalculatorApp<C> {
    console: C,
}

impl<C: Console> ShapeCalculatorApp<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        log::info!("Shape calculator session started");
        self.ui().show_header()?;

        let mut calculations = 0usize;
        loop {
            self.ui().show_shape_menu()?;

            let Some(kind) = self.input().read_shape_kind()? else {
                self.ui().show_invalid_selection_message()?;
                continue;
            };

            let length = self.input().read_length()?;
            let shape = ShapeFactory::create(kind, length)?;
            self.ui().show_shape_results(&shape)?;
            calculations += 1;
            log::debug!("Calculated {:?}", shape);

            if !self.ui().ask_to_continue()? {
                break;
            }
        }

        self.ui().show_blank_line()?;
        self.ui().show_footer()?;
        log::info!("Session finished after {} calculation(s)", calculations);
        Ok(())
    }

    fn ui(&mut self) -> ConsoleUi<&mut C> {
        ConsoleUi::new(&mut self.console)
    }

    fn input(&mut self) -> ShapeInputHandler<&mut C> {
        ShapeInputHandler::new(&mut self.console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ColorTag;
    use std::io;

    /// Reads succeed, every write fails.
    struct BrokenConsole {
        attempts: usize,
    }

    impl Console for BrokenConsole {
        fn write(&mut self, _text: &str) -> io::Result<()> {
            self.fail()
        }

        fn write_line(&mut self, _text: &str) -> io::Result<()> {
            self.fail()
        }

        fn write_tagged(&mut self, _text: &str, _tag: ColorTag) -> io::Result<()> {
            self.fail()
        }

        fn write_line_tagged(&mut self, _text: &str, _tag: ColorTag) -> io::Result<()> {
            self.fail()
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(Some(String::new()))
        }

        fn read_input(&mut self, _tag: ColorTag) -> io::Result<Option<String>> {
            Ok(Some(String::new()))
        }

        fn reset_color(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl BrokenConsole {
        fn fail(&mut self) -> io::Result<()> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "write failed"))
        }
    }

    #[test]
    fn test_console_failure_ends_the_session() {
        let mut app = ShapeCalculatorApp::new(BrokenConsole { attempts: 0 });

        let err = app.run().unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(app.into_console().attempts, 1);
    }
}
