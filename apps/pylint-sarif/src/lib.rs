//! pylint-sarif core library.
//!
//! This crate converts pylint's rule listing and JSON diagnostics into a
//! SARIF 2.1.0 log.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `rules`: Rule catalog state machine over `pylint --list-msgs`.
//! - `results`: pylint JSON records to SARIF results.
//! - `message`: Caret-excerpt stripping and sentence cleanup.
//! - `uri`: Host paths to `file://` URIs.
//! - `exit_code`: pylint's bit-field exit status.
//! - `output`: Log assembly, validation, serialization, and printers.
//! - `convert`: Pipeline shared by the `run` and `convert` commands.
//! - `runner`: pylint process invocation.
//! - `models`: Input records, rule descriptors, SARIF structures.
//! - `error`: Error taxonomy.
//! - `utils`: Operator message prefixes and helpers.
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod exit_code;
pub mod message;
pub mod models;
pub mod output;
pub mod results;
pub mod rules;
pub mod runner;
pub mod uri;
pub mod utils;

pub use error::{Error, Result};
