use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flowpitch_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "flowpitch")]
#[command(author, version, about = "A terminal pitch-deck viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck (default)
    Run(RunArgs),
    /// List the slides of a deck
    List {
        /// Deck file (TOML); the built-in demo when omitted
        #[arg(short, long)]
        deck: Option<PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a deck file
    Check {
        /// Deck file (TOML)
        path: PathBuf,
    },
    /// Show or initialize the configuration file
    Config {
        /// Write the default configuration if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Deck file (TOML); the built-in demo when omitted
    #[arg(short, long)]
    pub deck: Option<PathBuf>,
    /// Wrap around past the first and last slide
    #[arg(long = "loop")]
    pub loop_at_end: bool,
    /// Slide to open on (1-based)
    #[arg(short, long)]
    pub start: Option<usize>,
    /// Theme name (overrides config)
    #[arg(short, long)]
    pub theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let to_file = matches!(cli.command, Some(Commands::Run(_)) | None);
    init_logging(&config, to_file)?;

    match cli.command {
        Some(Commands::Run(args)) => commands::run::run(config, args),
        None => commands::run::run(config, RunArgs::default()),
        Some(Commands::List { deck, json }) => commands::list::run(&config, deck, json),
        Some(Commands::Check { path }) => commands::check::run(&path),
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}

/// The TUI owns the terminal, so `run` logs to a file; other commands log to stderr
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::options().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_run() {
        let cli = Cli::try_parse_from(["flowpitch"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "flowpitch", "run", "--deck", "pitch.toml", "--loop", "--start", "3", "--theme", "nord",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.deck, Some(PathBuf::from("pitch.toml")));
        assert!(args.loop_at_end);
        assert_eq!(args.start, Some(3));
        assert_eq!(args.theme.as_deref(), Some("nord"));
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["flowpitch", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { deck: None, json: true })));
    }

    #[test]
    fn test_check_requires_path() {
        assert!(Cli::try_parse_from(["flowpitch", "check"]).is_err());
    }
}
