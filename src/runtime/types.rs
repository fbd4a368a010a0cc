//! Runtime domain types: error codes, application roles, session tokens.
//!
//! These mirror the enumerants the native loader speaks. Raw codes cross the
//! FFI boundary as `i32`; everything above [`super::native`] works with the
//! typed forms defined here.

use std::fmt;

use clap::ValueEnum;

/// Interface version this probe validates and resolves.
pub const SYSTEM_INTERFACE_VERSION: &str = "IVRSystem_012";

/// Prefix for function-table lookup keys.
pub const FN_TABLE_PREFIX: &str = "FnTable:";

/// Build the lookup key for a versioned function table.
pub fn fn_table_key(version: &str) -> String {
    format!("{FN_TABLE_PREFIX}{version}")
}

/// Initialization error code reported by the runtime.
///
/// The loader reports these through an output parameter on `init` and
/// `get-interface` calls. Codes not listed here are preserved in
/// [`InitError::Unrecognized`] rather than collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// Success.
    None,
    Unknown,
    InstallationNotFound,
    InstallationCorrupt,
    ClientLibNotFound,
    /// A code this build does not know a symbol for.
    Unrecognized(i32),
}

impl InitError {
    /// Map a raw code from the native loader.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => InitError::None,
            1 => InitError::Unknown,
            100 => InitError::InstallationNotFound,
            101 => InitError::InstallationCorrupt,
            102 => InitError::ClientLibNotFound,
            other => InitError::Unrecognized(other),
        }
    }

    /// The raw code as the loader reports it.
    pub fn as_raw(&self) -> i32 {
        match self {
            InitError::None => 0,
            InitError::Unknown => 1,
            InitError::InstallationNotFound => 100,
            InitError::InstallationCorrupt => 101,
            InitError::ClientLibNotFound => 102,
            InitError::Unrecognized(raw) => *raw,
        }
    }

    /// Symbolic name of the code, as the runtime's own diagnostics spell it.
    pub fn as_symbol(&self) -> Option<&'static str> {
        match self {
            InitError::None => Some("VRInitError_None"),
            InitError::Unknown => Some("VRInitError_Unknown"),
            InitError::InstallationNotFound => Some("VRInitError_Init_InstallationNotFound"),
            InitError::InstallationCorrupt => Some("VRInitError_Init_InstallationCorrupt"),
            InitError::ClientLibNotFound => Some("VRInitError_Init_VRClientDLLNotFound"),
            InitError::Unrecognized(_) => None,
        }
    }

    /// Whether the code signals success.
    pub fn is_ok(&self) -> bool {
        matches!(self, InitError::None)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_symbol() {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "VRInitError({})", self.as_raw()),
        }
    }
}

/// Application role passed to runtime initialization.
///
/// The probe initializes as [`ApplicationType::Scene`] by default; the other
/// roles are selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[repr(i32)]
pub enum ApplicationType {
    Other = 0,
    Scene = 1,
    Overlay = 2,
    Background = 3,
    Utility = 4,
    Monitor = 5,
}

impl ApplicationType {
    /// Raw enumerant value for the FFI boundary.
    pub fn as_raw(&self) -> i32 {
        *self as i32
    }

    /// Lowercase role name, matching the CLI value.
    pub fn name(&self) -> &'static str {
        match self {
            ApplicationType::Other => "other",
            ApplicationType::Scene => "scene",
            ApplicationType::Overlay => "overlay",
            ApplicationType::Background => "background",
            ApplicationType::Utility => "utility",
            ApplicationType::Monitor => "monitor",
        }
    }
}

// clap's default_value_t stringifies the default through Display.
impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque session handle returned by runtime initialization.
///
/// Never dereferenced; held only so the report can show it and so a zero
/// token can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Wrap a raw token value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// A zero token means the runtime handed back no usable session.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_table_key_concatenates_prefix_and_version() {
        assert_eq!(
            fn_table_key(SYSTEM_INTERFACE_VERSION),
            "FnTable:IVRSystem_012"
        );
    }

    #[test]
    fn init_error_round_trips_known_codes() {
        for raw in [0, 1, 100, 101, 102] {
            assert_eq!(InitError::from_raw(raw).as_raw(), raw);
        }
    }

    #[test]
    fn init_error_preserves_unrecognized_raw_value() {
        let code = InitError::from_raw(117);
        assert_eq!(code, InitError::Unrecognized(117));
        assert_eq!(code.as_raw(), 117);
        assert!(code.as_symbol().is_none());
        assert!(code.to_string().contains("117"));
    }

    #[test]
    fn init_error_symbols_match_runtime_spelling() {
        assert_eq!(InitError::None.as_symbol(), Some("VRInitError_None"));
        assert_eq!(
            InitError::InstallationCorrupt.as_symbol(),
            Some("VRInitError_Init_InstallationCorrupt")
        );
        assert_eq!(
            InitError::ClientLibNotFound.as_symbol(),
            Some("VRInitError_Init_VRClientDLLNotFound")
        );
    }

    #[test]
    fn only_none_is_ok() {
        assert!(InitError::None.is_ok());
        assert!(!InitError::Unknown.is_ok());
        assert!(!InitError::Unrecognized(42).is_ok());
    }

    #[test]
    fn application_type_raw_values() {
        assert_eq!(ApplicationType::Other.as_raw(), 0);
        assert_eq!(ApplicationType::Scene.as_raw(), 1);
        assert_eq!(ApplicationType::Overlay.as_raw(), 2);
        assert_eq!(ApplicationType::Background.as_raw(), 3);
        assert_eq!(ApplicationType::Utility.as_raw(), 4);
        assert_eq!(ApplicationType::Monitor.as_raw(), 5);
    }

    #[test]
    fn application_type_displays_role_name() {
        assert_eq!(ApplicationType::Scene.to_string(), "scene");
        assert_eq!(ApplicationType::Monitor.to_string(), "monitor");
    }

    #[test]
    fn session_token_zero_check() {
        assert!(SessionToken::new(0).is_zero());
        assert!(!SessionToken::new(1).is_zero());
        assert_eq!(SessionToken::new(7).raw(), 7);
    }
}
