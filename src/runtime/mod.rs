//! VR runtime client: types, trait seam, and the native loader binding.
//!
//! - [`types`] - Error codes, application roles, session tokens, lookup keys
//! - [`client`] - The [`VrRuntime`]/[`SystemInterface`] traits the probe runs against
//! - [`native`] - libloading-backed implementation over the loader library

pub mod client;
pub mod native;
pub mod types;

pub use client::{SystemInterface, VrRuntime};
pub use native::{default_library_name, NativeRuntime};
pub use types::{
    fn_table_key, ApplicationType, InitError, SessionToken, SYSTEM_INTERFACE_VERSION,
};
