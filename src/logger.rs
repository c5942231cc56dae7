//! Diagnostic logging via `tracing`.
//!
//! Output goes to stderr. Stdout carries the truncated results and must stay
//! clean for pipelines.
//!
//! The level is resolved once at startup, first match wins:
//! `--log-level` flag, then the `TRUNCATOR_LOG` environment variable, then
//! `log_level` from the config file, then `warn`. A value that does not parse
//! is skipped rather than treated as an error.

use tracing::level_filters::LevelFilter;

pub const LOG_ENV_VAR: &str = "TRUNCATOR_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

pub fn resolve_level(cli_level: Option<&str>, env_level: Option<&str>, config_level: &str) -> LevelFilter {
    [cli_level, env_level, Some(config_level)]
        .into_iter()
        .flatten()
        .find_map(|raw| raw.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
