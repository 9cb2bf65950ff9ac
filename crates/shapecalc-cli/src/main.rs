use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use shapecalc_term::{ColorMode, Config, ShapeCalculatorApp, TerminalConsole};

#[derive(Parser, Debug)]
#[clap(
    name = "shapecalc",
    author,
    version,
    about = "Interactive area and boundary length calculator for simple shapes"
)]
struct Cli {
    #[clap(long, short, default_value = "warn", help = "Log level written to stderr")]
    log_level: String,

    #[clap(
        long,
        value_enum,
        default_value_t = ColorMode::Auto,
        help = "When to colour console output"
    )]
    color: ColorMode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        color: cli.color,
        log_level: Config::parse_log_level(&cli.log_level),
    };

    // Logs go to stderr so the interactive transcript on stdout stays clean.
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    let styling = config.styling_enabled(std::io::stdout().is_tty());
    log::debug!("Starting with {:?} (styling: {})", config, styling);

    let mut app = ShapeCalculatorApp::new(TerminalConsole::stdio(styling));
    app.run()?;

    Ok(())
}
