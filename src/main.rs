#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::cargo)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::process::ExitCode;

use clap::Parser;

use truncator::cli::{Cli, Commands, CutArgs};
use truncator::config::Config;
use truncator::cut::{cut_lines, cut_texts};
use truncator::logger::{self, LOG_ENV_VAR};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_result = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);

    let config_level = config_result
        .as_ref()
        .map_or("warn", |config| config.log_level.as_str());
    let env_level = std::env::var(LOG_ENV_VAR).ok();
    logger::init(logger::resolve_level(
        cli.log_level.as_deref(),
        env_level.as_deref(),
        config_level,
    ));

    match cli.command {
        Commands::Cut(args) => match config_result {
            Ok(config) => cmd_cut(&args, &config),
            Err(e) => {
                tracing::error!("Config error: {e}");
                eprintln!("truncator: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Version => cmd_version(),
    }
}

fn cmd_cut(args: &CutArgs, config: &Config) -> ExitCode {
    let (width, mode) = args.resolve(config);
    tracing::info!(width, ?mode, "truncating");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if args.text.is_empty() {
        cut_lines(io::stdin().lock(), &mut out, width, mode).map(|_| ())
    } else {
        cut_texts(&mut out, &args.text, width, mode)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Cut failed: {e}");
            eprintln!("truncator: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_version() -> ExitCode {
    println!("truncator {}", env!("CARGO_PKG_VERSION"));
    ExitCode::SUCCESS
}
