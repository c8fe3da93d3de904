//! Command-line configuration. The tracker reads nothing from the environment
//! or disk; every knob is a flag.

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::ui::SessionOptions;

#[derive(Debug, Parser)]
#[command(name = "library-tracker", version, about = "Interactive in-memory book lending tracker")]
pub struct Cli {
    /// Start with an empty shelf instead of the sample books
    #[arg(long)]
    pub empty: bool,

    /// Disable screen clearing and coloured output
    #[arg(long)]
    pub plain: bool,

    /// Skip the "Press Enter to continue" pause after each action
    #[arg(long)]
    pub no_pause: bool,

    /// Diagnostics written to stderr at or above this level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub seed_samples: bool,
    pub session: SessionOptions,
    pub log_level: Level,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            seed_samples: !cli.empty,
            session: SessionOptions {
                clear_screen: !cli.plain,
                color: !cli.plain,
                pause: !cli.no_pause,
            },
            log_level: cli.log_level.into(),
        }
    }
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_and_decorate() {
        let config: Config = Cli::parse_from(["library-tracker"]).into();
        assert!(config.seed_samples);
        assert!(config.session.clear_screen);
        assert!(config.session.color);
        assert!(config.session.pause);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn flags_turn_things_off() {
        let config: Config = Cli::parse_from([
            "library-tracker",
            "--empty",
            "--plain",
            "--no-pause",
            "--log-level",
            "debug",
        ])
        .into();
        assert!(!config.seed_samples);
        assert!(!config.session.clear_screen);
        assert!(!config.session.color);
        assert!(!config.session.pause);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["library-tracker", "--log-level", "loud"]).is_err());
    }
}
