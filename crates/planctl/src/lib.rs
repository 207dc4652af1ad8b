//! planctl - action plan snapshot viewer
//!
//! Library side of the `planctl` binary: configuration, logging setup and
//! the output of each subcommand.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{format_summary, render, OutputKind};
pub use config::PlanctlConfig;
