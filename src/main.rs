use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use vfsh::app::Session;
use vfsh::config::Config;
use vfsh::core::{autocomplete, candidates};
use vfsh::models::{OutputLine, OutputLineData, TextStyle};

/// Sequence that clears an ANSI terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Interactive shell over an in-memory file tree.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "VFSH_CONFIG")]
    config: Option<PathBuf>,

    /// Compatibility mode, see `FsOptions::compat`
    #[arg(long)]
    compat: bool,

    #[arg(long, short, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Silent => LevelFilter::OFF,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.compat {
        config.apply_compat();
    }

    run(Session::new(config))?;
    Ok(())
}

/// Logs go to stderr so they never interleave with shell output. `RUST_LOG`
/// overrides `--log-level` when set.
fn setup_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.log_level.to_level_filter().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

fn run(mut session: Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in session.output() {
        writeln!(stdout, "{}", render(line))?;
    }

    let mut buf = String::new();
    loop {
        write!(stdout, "{} ", session.prompt())?;
        stdout.flush()?;

        buf.clear();
        if stdin.lock().read_line(&mut buf)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }
        let line = buf.trim_end_matches(['\r', '\n']);

        if session.pending_edit().is_none() {
            if let Some(partial) = line.strip_suffix('\t') {
                complete(&mut stdout, partial)?;
                continue;
            }
        }

        let response = session.submit(line);
        if response.clear_screen {
            write!(stdout, "{CLEAR_SCREEN}")?;
        }
        for line in &response.lines {
            // The terminal already shows what was typed
            if matches!(line.data, OutputLineData::Command { .. }) {
                continue;
            }
            writeln!(stdout, "{}", render(line))?;
        }
    }
}

fn complete(out: &mut impl Write, partial: &str) -> io::Result<()> {
    let matches = candidates(partial.trim_start());
    writeln!(out, "{}", autocomplete(partial.trim_start()))?;
    if matches.len() > 1 {
        writeln!(out, "{}", matches.join("  ").dimmed())?;
    }
    Ok(())
}

fn render(line: &OutputLine) -> String {
    match &line.data {
        OutputLineData::Command { prompt, input } => format!("{} {}", prompt.green().bold(), input),
        OutputLineData::Text(text) => text.clone(),
        OutputLineData::Error(text) => text.red().to_string(),
        OutputLineData::Success(text) => text.green().to_string(),
        OutputLineData::Info(text) => text.cyan().to_string(),
        OutputLineData::Empty => String::new(),
        OutputLineData::ListEntry { name, style } => match style {
            TextStyle::Directory => name.blue().bold().to_string(),
            TextStyle::File => name.clone(),
            TextStyle::Hidden => name.dimmed().to_string(),
        },
    }
}
