use clap::ValueEnum;
use log::LevelFilter;
use strum_macros::Display;

/// When to emit colour escape sequences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// Style output only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Parses a log level name, falling back to `warn` for unknown names.
    pub fn parse_log_level(raw: &str) -> LevelFilter {
        raw.trim().parse().unwrap_or(LevelFilter::Warn)
    }

    pub fn styling_enabled(&self, is_tty: bool) -> bool {
        match self.color {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
