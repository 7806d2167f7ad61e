//! # CLI Layer
//!
//! One possible client of the notebook library. This is the only place that:
//! - parses arguments (clap)
//! - writes to stdout/stderr and installs the logger
//! - turns outcomes into text and errors into an exit code
//!
//! "Not found" outcomes are printed as warnings and still exit 0. Only real
//! errors (bad input, unreadable or corrupt notes file, failed writes) reach
//! `main`, which prints them and exits 1.
//!
//! - `setup`: clap definitions and version string
//! - `commands`: dispatch and per-command handlers
//! - `render`: text formatting of notes and messages
//! - `logging`: env_logger bootstrap

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
