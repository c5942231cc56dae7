use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::cut::Mode;
use crate::width::parse_width;

/// Truncate strings to a maximum width, marking the cut with a trailing dot
#[derive(Debug, Parser)]
#[command(name = "truncator", version, about)]
pub struct Cli {
    /// Log level for diagnostics on stderr (error, warn, info, debug, trace, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Read settings from this file instead of the default config location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Truncate each TEXT, or each stdin line when no TEXT is given
    Cut(CutArgs),
    /// Print the version and exit
    Version,
}

#[derive(Debug, Args)]
pub struct CutArgs {
    /// Maximum width of each output line [default: from config, else 80]
    #[arg(short, long, value_parser = parse_width, allow_negative_numbers = true)]
    pub width: Option<usize>,

    /// Count bytes instead of characters
    #[arg(long, conflicts_with = "chars")]
    pub bytes: bool,

    /// Count characters, overriding `bytes = true` in the config
    #[arg(long)]
    pub chars: bool,

    /// Strings to truncate
    pub text: Vec<String>,
}

impl CutArgs {
    /// Width and mode for this run. Flags win over the config file.
    pub const fn resolve(&self, config: &Config) -> (usize, Mode) {
        let width = match self.width {
            Some(width) => width,
            None => config.width,
        };
        let mode = if self.bytes {
            Mode::Bytes
        } else if self.chars {
            Mode::Chars
        } else {
            Mode::from_bytes_flag(config.bytes)
        };
        (width, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cut_command() {
        let cli = Cli::try_parse_from(["truncator", "cut", "-w", "5", "abcdef", "xy"]);
        assert!(cli.is_ok());
        let Ok(cli) = cli else { return };
        let Commands::Cut(args) = cli.command else {
            panic!("Expected cut command");
        };
        assert_eq!(args.width, Some(5));
        assert!(!args.bytes);
        assert_eq!(args.text, vec!["abcdef", "xy"]);
    }

    #[test]
    fn test_parse_cut_without_width_or_text() {
        let cli = Cli::try_parse_from(["truncator", "cut", "--bytes"]);
        assert!(cli.is_ok());
        let Ok(cli) = cli else { return };
        let Commands::Cut(args) = cli.command else {
            panic!("Expected cut command");
        };
        assert_eq!(args.width, None);
        assert!(args.bytes);
        assert!(args.text.is_empty());
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let err = Cli::try_parse_from(["truncator", "cut", "--width", "-3", "abc"]);
        assert!(err.is_err());
        if let Err(err) = err {
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
            assert!(err.to_string().contains("width must not be negative"));
        }
    }

    #[test]
    fn test_non_numeric_width_is_rejected() {
        let err = Cli::try_parse_from(["truncator", "cut", "--width", "wide"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "truncator",
            "cut",
            "--log-level",
            "debug",
            "--config",
            "/tmp/t.toml",
        ]);
        assert!(cli.is_ok());
        let Ok(cli) = cli else { return };
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
    }

    fn cut_args(argv: &[&str]) -> CutArgs {
        let cli = Cli::try_parse_from(argv);
        assert!(cli.is_ok());
        let Ok(cli) = cli else {
            panic!("arguments should parse");
        };
        let Commands::Cut(args) = cli.command else {
            panic!("Expected cut command");
        };
        args
    }

    fn config(width: usize, bytes: bool) -> Config {
        Config {
            width,
            bytes,
            ..Config::default()
        }
    }

    #[test]
    fn test_resolve_width_flag_wins() {
        let args = cut_args(&["truncator", "cut", "-w", "3"]);
        assert_eq!(args.resolve(&config(40, false)), (3, Mode::Chars));
    }

    #[test]
    fn test_resolve_width_from_config() {
        let args = cut_args(&["truncator", "cut"]);
        assert_eq!(args.resolve(&config(40, false)), (40, Mode::Chars));
    }

    #[test]
    fn test_resolve_width_default() {
        let args = cut_args(&["truncator", "cut"]);
        assert_eq!(
            args.resolve(&Config::default()),
            (crate::config::DEFAULT_WIDTH, Mode::Chars)
        );
    }

    #[test]
    fn test_resolve_bytes_flag() {
        let args = cut_args(&["truncator", "cut", "--bytes"]);
        assert_eq!(args.resolve(&config(10, false)), (10, Mode::Bytes));
    }

    #[test]
    fn test_resolve_bytes_from_config() {
        let args = cut_args(&["truncator", "cut"]);
        assert_eq!(args.resolve(&config(10, true)), (10, Mode::Bytes));
    }

    #[test]
    fn test_resolve_chars_flag_overrides_config() {
        let args = cut_args(&["truncator", "cut", "--chars"]);
        assert_eq!(args.resolve(&config(10, true)), (10, Mode::Chars));
    }

    #[test]
    fn test_bytes_and_chars_conflict() {
        let err = Cli::try_parse_from(["truncator", "cut", "--bytes", "--chars"]);
        assert!(err.is_err());
        if let Err(err) = err {
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn test_parse_version_command() {
        let cli = Cli::try_parse_from(["truncator", "version"]);
        assert!(cli.is_ok());
        let Ok(cli) = cli else { return };
        assert!(matches!(cli.command, Commands::Version));
    }
}
