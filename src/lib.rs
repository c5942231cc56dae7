//! Width-bounded string truncation.
//!
//! The core lives in [`truncate`]; the remaining modules make up the
//! `truncator` command-line front end and are public so integration tests in
//! `tests/` can drive them.

pub mod cli;
pub mod config;
pub mod cut;
pub mod error;
pub mod logger;
pub mod truncate;
pub mod width;

pub use truncate::{truncate, truncate_bytes, MARKER};
pub use width::Width;
