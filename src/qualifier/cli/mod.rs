//! # CLI Layer
//!
//! One possible UI client for qualifier. This is the only place that knows
//! about stdin/stdout/stderr, exit codes, terminal colours and log output.
//!
//! - `setup`: clap argument definitions
//! - `commands`: context setup, dispatch, interactive loop
//! - `print`: turns a `CmdResult` into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
