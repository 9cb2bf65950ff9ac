use std::collections::VecDeque;
use std::io;

use super::Console;
use crate::domain::models::ColorTag;

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub text: String,
    pub tag: ColorTag,
    pub newline: bool,
}

/// In-memory console fed from a queue of input lines.
///
/// A queued `None` reads as absent input, and so does an exhausted queue.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Option<String>>,
    writes: Vec<Written>,
    resets: usize,
    reads: Vec<ColorTag>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|line| Some(line.into())).collect(),
            ..Default::default()
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.inputs.push_back(Some(line.into()));
        self
    }

    pub fn push_absent(&mut self) -> &mut Self {
        self.inputs.push_back(None);
        self
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn writes(&self) -> &[Written] {
        &self.writes
    }

    /// Tags passed to each `read_input` call, in order.
    pub fn reads(&self) -> &[ColorTag] {
        &self.reads
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Everything written so far, as it would appear on a plain terminal.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for written in &self.writes {
            out.push_str(&written.text);
            if written.newline {
                out.push('\n');
            }
        }
        out
    }

    /// Texts written with `tag`, in order.
    pub fn tagged(&self, tag: ColorTag) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|w| w.tag == tag)
            .map(|w| w.text.as_str())
            .collect()
    }

    pub fn count(&self, text: &str, tag: ColorTag) -> usize {
        self.writes
            .iter()
            .filter(|w| w.text == text && w.tag == tag)
            .count()
    }

    fn record(&mut self, text: &str, tag: ColorTag, newline: bool) {
        self.writes.push(Written {
            text: text.to_string(),
            tag,
            newline,
        });
    }

    fn next_input(&mut self) -> Option<String> {
        self.inputs.pop_front().flatten()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.record(text, ColorTag::Default, false);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.record(text, ColorTag::Default, true);
        Ok(())
    }

    fn write_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        self.record(text, tag, false);
        Ok(())
    }

    fn write_line_tagged(&mut self, text: &str, tag: ColorTag) -> io::Result<()> {
        self.record(text, tag, true);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.next_input())
    }

    fn read_input(&mut self, tag: ColorTag) -> io::Result<Option<String>> {
        self.reads.push(tag);
        Ok(self.next_input())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.resets += 1;
        Ok(())
    }
}
