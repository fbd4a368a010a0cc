//! The ordered check sequence.
//!
//! Five checks against the runtime's loader surface, run strictly in order
//! with fail-fast short-circuit: hardware presence, runtime installation,
//! session initialization, interface-version validation, function-table
//! resolution. Only when all five pass is the display-mirroring query
//! invoked, exactly once.

use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::runtime::{
    fn_table_key, ApplicationType, InitError, SessionToken, VrRuntime, SYSTEM_INTERFACE_VERSION,
};

/// What a successful probe learned.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// Whether display output mirrors to the desktop monitor.
    pub display_on_desktop: bool,

    /// Session token the runtime handed back on initialization.
    pub session_token: SessionToken,

    /// Interface version the runtime accepted.
    pub interface_version: &'static str,

    /// Application role the session was initialized as.
    pub app_type: ApplicationType,
}

/// Ensures the runtime session is torn down on every exit path.
///
/// Installed as soon as initialization has been attempted; dropped on the
/// success path, when initialization itself reports an error code, and when
/// a later check bails out.
struct ShutdownGuard<'a> {
    runtime: &'a dyn VrRuntime,
}

impl Drop for ShutdownGuard<'_> {
    fn drop(&mut self) {
        self.runtime.shutdown();
    }
}

/// Run the check sequence against a runtime.
///
/// Returns the first failing check as an error; each failure prevents every
/// later runtime call.
pub fn run(runtime: &dyn VrRuntime, app_type: ApplicationType) -> Result<ProbeOutcome> {
    debug!(role = app_type.name(), "starting check sequence");

    if !runtime.is_hmd_present() {
        return Err(ProbeError::NoHmd);
    }
    debug!("head-mounted display detected");

    if !runtime.is_runtime_installed() {
        return Err(ProbeError::RuntimeNotInstalled);
    }
    debug!("runtime installation found");

    let (token, code) = runtime.init(app_type);
    // Whatever initialization did, undo it on every exit path from here on.
    let _session = ShutdownGuard { runtime };

    if !code.is_ok() {
        return Err(ProbeError::InitFailed { code });
    }

    if token.is_zero() {
        return Err(ProbeError::InitFailed {
            code: InitError::Unknown,
        });
    }
    debug!(token = token.raw(), "runtime session initialized");

    let version = SYSTEM_INTERFACE_VERSION;
    if !runtime.is_interface_version_valid(version) {
        return Err(ProbeError::InterfaceVersionRejected {
            version: version.to_string(),
        });
    }

    let key = fn_table_key(version);
    let (interface, code) = runtime.system_interface(&key);
    if !code.is_ok() {
        return Err(ProbeError::InterfaceUnavailable { key, code });
    }
    let Some(interface) = interface else {
        return Err(ProbeError::NullInterface { key });
    };
    debug!(key = %key, "function table resolved");

    let display_on_desktop = interface.is_display_on_desktop();

    Ok(ProbeOutcome {
        display_on_desktop,
        session_token: token,
        interface_version: version,
        app_type,
    })
}
