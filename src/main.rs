//! `scroller` binary: parse flags, open the file, play it back.

use clap::Parser;
use scroller::{
    ChunkProducer, Cli, Config, Engine, EngineConfig, LineEnding, LineOutput, Mode, Outcome,
    ScrollError, TextProducer,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit with 2
    let cli = Cli::parse();

    if let Err(e) = scroller::logging::init(cli.log_file.as_deref()) {
        eprintln!("failed to open log file: {e}");
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("scroller: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    println!("Printing {:.6} lines / second.", config.units_per_second());

    match play(&config) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            match &e {
                ScrollError::Read(_) => eprintln!("{}: {e}", config.file.display()),
                _ => eprintln!("{e}"),
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run one playback. The terminal is back in cooked mode when this returns.
fn play(config: &Config) -> Result<Outcome, ScrollError> {
    let file = File::open(&config.file).map_err(|source| ScrollError::Open {
        path: config.file.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let engine = Engine::start(EngineConfig::from(config))?;
    tracing::info!(file = %config.file.display(), mode = ?config.mode, "playing");

    let out = LineOutput::with_ending(io::stdout(), LineEnding::CrLf);
    match config.mode {
        Mode::Text => engine.run(TextProducer::new(reader, out)),
        Mode::Hex => engine.run(ChunkProducer::new(reader, config.width, config.tail, out)),
    }
}
