//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::probe::OutputFormat;
use crate::runtime::ApplicationType;

/// vrprobe - VR runtime installation smoke probe.
#[derive(Debug, Parser)]
#[command(name = "vrprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the runtime loader library (overrides the platform default)
    #[arg(short, long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Application role to initialize the runtime session as
    #[arg(long, value_enum, default_value_t = ApplicationType::Scene)]
    pub app_type: ApplicationType,

    /// Output format for the probe report
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Suppress the banner line
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
