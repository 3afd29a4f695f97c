//! Command line flags.

use crate::config::{Config, ConfigError, Mode, DEFAULT_WIDTH};
use crate::producer::TailPolicy;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Page a file at a steady pace. Space pauses and resumes, Esc quits.
#[derive(Debug, Parser)]
#[command(name = "scroller", version, about, disable_help_flag = true)]
pub struct Cli {
    /// The file to display.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Speed multiplier; 1 shows one unit per second.
    #[arg(short = 's', long = "speed", default_value_t = 1, value_name = "N")]
    pub speed: u32,

    /// Output hex instead of text.
    #[arg(short = 'h', long = "hex")]
    pub hex: bool,

    /// Number of 8-byte columns per hex row.
    #[arg(short = 'w', long = "width", default_value_t = DEFAULT_WIDTH, value_name = "N")]
    pub width: usize,

    /// Render the last hex row over the previous row's bytes instead of
    /// truncating it.
    #[arg(long = "stale-tail")]
    pub stale_tail: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print help.
    #[arg(long = "help", action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    /// Validate the flags into a playback configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mode = if self.hex { Mode::Hex } else { Mode::Text };
        let tail = if self.stale_tail {
            TailPolicy::Stale
        } else {
            TailPolicy::Truncate
        };
        Config::new(self.file, self.speed, self.width, mode, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("scroller").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-f", "notes.txt"]).unwrap().into_config().unwrap();
        assert_eq!(config.file, PathBuf::from("notes.txt"));
        assert_eq!(config.mode, Mode::Text);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.rate, Duration::from_secs(1));
        assert_eq!(config.tail, TailPolicy::Truncate);
    }

    #[test]
    fn test_short_h_selects_hex() {
        let config = parse(&["-h", "-w", "4", "-s", "10", "-f", "a.bin", "--stale-tail"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.mode, Mode::Hex);
        assert_eq!(config.width, 4);
        assert_eq!(config.rate, Duration::from_millis(100));
        assert_eq!(config.tail, TailPolicy::Stale);
    }

    #[test]
    fn test_file_is_required() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_long_help_still_works() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_zero_speed_is_a_config_error() {
        let cli = parse(&["-f", "x", "-s", "0"]).unwrap();
        assert_eq!(cli.into_config(), Err(ConfigError::ZeroSpeed));
    }
}
