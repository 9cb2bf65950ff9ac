use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

use super::Console;
use crate::domain::models::ColorTag;

/// Console binding for a real terminal, or any reader/writer pair.
///
/// When styling is disabled no escape sequences are emitted and the output is
/// plain text.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    styling: bool,
    resting: Option<Color>,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio(styling: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), styling)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W, styling: bool) -> Self {
        Self {
            reader,
            writer,
            styling,
            resting: None,
        }
    }

    /// Sets the colour that tagged calls restore once they finish.
    pub fn set_foreground(&mut self, tag: ColorTag) -> io::Result<()> {
        self.resting = Some(palette(tag));
        if self.styling {
            queue!(self.writer, SetForegroundColor(palette(tag)))?;
        }
        self.writer.flush()
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    fn write_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        let mut guard = StyleGuard::apply(&mut self.writer, self.styling, tag, self.resting)?;
        let out = guard.writer();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn write_line_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        let mut guard = StyleGuard::apply(&mut self.writer, self.styling, tag, self.resting)?;
        let out = guard.writer();
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;
        read_one_line(&mut self.reader)
    }

    fn read_input(&mut self, tag: ColorTag) -> io::Result<Option<String>> {
        let mut guard = StyleGuard::apply(&mut self.writer, self.styling, tag, self.resting)?;
        guard.writer().flush()?;
        read_one_line(&mut self.reader)
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.resting = None;
        if self.styling {
            queue!(self.writer, ResetColor)?;
        }
        self.writer.flush()
    }
}

fn read_one_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        log::debug!("Input source exhausted");
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn palette(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Header | ColorTag::Footer => Color::Green,
        ColorTag::Prompt => Color::Cyan,
        ColorTag::Input => Color::White,
        ColorTag::Result => Color::Yellow,
        ColorTag::Error => Color::Red,
        ColorTag::Default => Color::Grey,
    }
}

/// Holds a tag's colour for as long as it lives and restores the resting
/// colour on drop, including when the guarded write failed.
struct StyleGuard<'a, W: Write> {
    writer: &'a mut W,
    restore: Option<Option<Color>>,
}

impl<'a, W: Write> StyleGuard<'a, W> {
    fn apply(
        writer: &'a mut W,
        styling: bool,
        tag: ColorTag,
        resting: Option<Color>,
    ) -> io::Result<Self> {
        if !styling {
            return Ok(Self {
                writer,
                restore: None,
            });
        }
        queue!(writer, SetForegroundColor(palette(tag)))?;
        Ok(Self {
            writer,
            restore: Some(resting),
        })
    }

    fn writer(&mut self) -> &mut W {
        &mut *self.writer
    }
}

impl<W: Write> Drop for StyleGuard<'_, W> {
    fn drop(&mut self) {
        let Some(resting) = self.restore else {
            return;
        };
        let restored = match resting {
            Some(color) => queue!(self.writer, SetForegroundColor(color)),
            None => queue!(self.writer, ResetColor),
        };
        if let Err(err) = restored.and_then(|_| self.writer.flush()) {
            log::warn!("Failed to restore console colour: {}", err);
        }
    }
}
