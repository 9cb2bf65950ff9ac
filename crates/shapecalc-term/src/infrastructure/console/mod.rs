//! Line-oriented console abstraction
//!
//! Everything the calculator prints or reads goes through [`Console`]. The
//! production binding talks to a real terminal; the scripted binding replays a
//! queue of lines and records what was written, which is how the session logic
//! is tested without a terminal attached.
//!
//! Tagged operations apply the tag's style only for the duration of the call.
//! Reads return `Ok(None)` when the input source is exhausted; callers treat
//! that the same as an empty line.

mod scripted;
mod terminal;

pub use scripted::{ScriptedConsole, Written};
pub use terminal::TerminalConsole;

use std::io;

use crate::domain::models::ColorTag;

pub trait Console {
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()>;

    fn write_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()>;

    fn write_line_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()>;

    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn read_input(&mut self, tag: ColorTag) -> io::Result<Option<String>>;

    fn reset_color(&mut self) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn write_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        (**self).write_tagged(text, tag)
    }

    fn write_line_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        (**self).write_line_tagged(text, tag)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn read_input(&mut self, tag: ColorTag) -> io::Result<Option<String>> {
        (**self).read_input(tag)
    }

    fn reset_color(&mut self) -> io::Result<()> {
        (**self).reset_color()
    }
}
