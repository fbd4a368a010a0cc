//! Error types for probe operations.
//!
//! This module defines [`ProbeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ProbeError` for the distinct terminal failures of the check sequence
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors
//! - Every check failure maps to process exit code 1; the variant only
//!   controls the message

use std::path::PathBuf;
use thiserror::Error;

use crate::runtime::InitError;

/// Core error type for probe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The runtime's loader library could not be opened.
    #[error("Failed to load runtime library '{path}': {message}")]
    LibraryLoad { path: PathBuf, message: String },

    /// A required export is missing from the loader library.
    #[error("Runtime library is missing export '{symbol}': {message}")]
    MissingExport { symbol: String, message: String },

    /// No head-mounted display is connected.
    #[error("No head-mounted display detected")]
    NoHmd,

    /// The VR runtime is not installed on this host.
    #[error("VR runtime is not installed")]
    RuntimeNotInstalled,

    /// Runtime initialization reported an error code, or returned a zero
    /// session token.
    #[error("Runtime initialization failed: {code}")]
    InitFailed { code: InitError },

    /// The running runtime rejected the interface version this probe speaks.
    #[error("Runtime does not support interface version '{version}'")]
    InterfaceVersionRejected { version: String },

    /// The versioned function table could not be resolved.
    #[error("Failed to resolve interface '{key}': {code}")]
    InterfaceUnavailable { key: String, code: InitError },

    /// The runtime resolved the function table to a null pointer.
    #[error("Runtime returned a null function table for '{key}'")]
    NullInterface { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Stable identifier of the check this error terminated on, for the
    /// machine-readable report.
    pub fn failed_check(&self) -> &'static str {
        match self {
            ProbeError::LibraryLoad { .. } | ProbeError::MissingExport { .. } => "load-runtime",
            ProbeError::NoHmd => "hmd-present",
            ProbeError::RuntimeNotInstalled => "runtime-installed",
            ProbeError::InitFailed { .. } => "initialize",
            ProbeError::InterfaceVersionRejected { .. } => "interface-version",
            ProbeError::InterfaceUnavailable { .. } | ProbeError::NullInterface { .. } => {
                "get-interface"
            }
            ProbeError::Io(_) | ProbeError::Other(_) => "internal",
        }
    }
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
