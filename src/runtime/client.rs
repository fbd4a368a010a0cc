//! Runtime client traits.
//!
//! The probe never talks to the native loader directly; it goes through
//! [`VrRuntime`], which covers exactly the loader operations the check
//! sequence consumes. Tests swap in scripted doubles.

use super::types::{ApplicationType, InitError, SessionToken};

/// The VR runtime's loader surface, as consumed by the probe.
pub trait VrRuntime {
    /// Whether a head-mounted display is physically connected.
    fn is_hmd_present(&self) -> bool;

    /// Whether the VR runtime is installed on this host.
    fn is_runtime_installed(&self) -> bool;

    /// Start a runtime session for the given application role.
    ///
    /// Returns the opaque session token together with the error code the
    /// runtime reported; the token is meaningful only when the code is
    /// success.
    fn init(&self, app_type: ApplicationType) -> (SessionToken, InitError);

    /// Whether the running runtime supports the named interface version.
    fn is_interface_version_valid(&self, version: &str) -> bool;

    /// Resolve a versioned function table by its lookup key.
    ///
    /// `None` stands for the null pointer the native loader can return even
    /// alongside a success code; callers must treat either a non-success code
    /// or `None` as failure.
    fn system_interface(&self, key: &str) -> (Option<Box<dyn SystemInterface + '_>>, InitError);

    /// Tear down the runtime session opened by [`VrRuntime::init`].
    fn shutdown(&self);
}

/// The one entry point the probe consumes from the resolved function table.
pub trait SystemInterface {
    /// Whether the display output is mirrored to the desktop monitor.
    fn is_display_on_desktop(&self) -> bool;
}
