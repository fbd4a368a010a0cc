//! Probe result rendering.
//!
//! Two formatters: human output for the terminal (the single result line the
//! probe exists to print) and JSON for tooling integration.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use super::sequence::ProbeOutcome;
use crate::error::ProbeError;

/// Output format for the probe report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

// clap's default_value_t stringifies the default through Display.
impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => f.write_str("human"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Formats the probe result for human consumption.
///
/// Success prints exactly one result line; failures print nothing here (the
/// failure message goes to stderr).
pub struct HumanFormatter;

impl HumanFormatter {
    /// Write the result line for a completed probe.
    pub fn format<W: Write>(&self, outcome: &ProbeOutcome, writer: &mut W) -> std::io::Result<()> {
        if outcome.display_on_desktop {
            writeln!(writer, "Display is on desktop")
        } else {
            writeln!(writer, "Display is NOT on desktop")
        }
    }
}

/// Formats the probe result as machine-readable JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_on_desktop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_token: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interface_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    application_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_check: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonFormatter {
    /// Write the full probe result, success or failure, as one JSON document.
    pub fn format<W: Write>(
        &self,
        result: &Result<ProbeOutcome, ProbeError>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let report = match result {
            Ok(outcome) => JsonReport {
                ok: true,
                display_on_desktop: Some(outcome.display_on_desktop),
                session_token: Some(outcome.session_token.raw()),
                interface_version: Some(outcome.interface_version),
                application_type: Some(outcome.app_type.name()),
                failed_check: None,
                error: None,
            },
            Err(err) => JsonReport {
                ok: false,
                display_on_desktop: None,
                session_token: None,
                interface_version: None,
                application_type: None,
                failed_check: Some(err.failed_check()),
                error: Some(err.to_string()),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}
