//! Command-line interface for vrprobe.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The probe command implementation

pub mod args;
pub mod command;

pub use args::Cli;
pub use command::{CommandResult, ProbeCommand};
