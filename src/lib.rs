//! vrprobe - VR runtime installation smoke probe.
//!
//! vrprobe checks whether a VR runtime is installed and reachable on this
//! machine: it dynamically loads the runtime's loader library, runs a fixed
//! fail-fast sequence of checks (display present, runtime installed, session
//! initializes, interface version supported, function table resolves), and
//! reports whether the display output mirrors to the desktop monitor.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the probe command
//! - [`error`] - Error types and result aliases
//! - [`probe`] - The ordered check sequence and report rendering
//! - [`runtime`] - Runtime client traits, domain types, and the native binding
//!
//! # Example
//!
//! ```
//! use vrprobe::runtime::{fn_table_key, SYSTEM_INTERFACE_VERSION};
//!
//! // The lookup key for the versioned function table
//! assert_eq!(fn_table_key(SYSTEM_INTERFACE_VERSION), "FnTable:IVRSystem_012");
//! ```
//!
//! Running the probe end-to-end requires the runtime's native library; the
//! check-sequence tests exercise it against a scripted runtime instead.

pub mod cli;
pub mod error;
pub mod probe;
pub mod runtime;

pub use error::{ProbeError, Result};
