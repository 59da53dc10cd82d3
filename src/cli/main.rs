use std::io::{self, Write};
use std::process;

use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod values;

use commands::Command;
use config::Config;
use error::{HexmixError, Result};
use output::Output;

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn run() -> Result<()> {
    let app = cli::build_cli();
    let global_matches = app.get_matches();

    let config = Config::from_matches(&global_matches);
    init_logging(&config);
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    let mut out = Output::new(&mut stdout_lock);

    if let Some((subcommand, matches)) = global_matches.subcommand() {
        let command = Command::from_string(subcommand);
        command.execute(matches, &mut out, &config)?;
        tracing::debug!(subcommand, lines = out.lines_shown(), "done");
    } else {
        unreachable!("Subcommand is required");
    }

    Ok(())
}

fn main() {
    let result = run();
    match result {
        Err(HexmixError::StdoutClosed) => {}
        Err(err) => {
            let stderr = io::stderr();
            let mut stderr_lock = stderr.lock();
            writeln!(stderr_lock, "[hexmix error]: {}", err).ok();
            process::exit(1);
        }
        Ok(()) => {}
    }
}
