//! Native loader binding.
//!
//! Dynamically loads the runtime's loader library and exposes it through
//! [`VrRuntime`]. All `unsafe` in the crate lives here: the exported loader
//! functions are plain C calls, and the resolved function table is read
//! through the pointer the loader hands back, never constructed on this side.
//!
//! Only the table prefix up to the one consumed entry is declared; every slot
//! is a function pointer, so the consumed slot's offset does not depend on the
//! signatures of the slots before it.

use std::ffi::{c_char, CString};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::debug;

use super::client::{SystemInterface, VrRuntime};
use super::types::{ApplicationType, InitError, SessionToken};
use crate::error::{ProbeError, Result};

/// Platform file name of the runtime's loader library.
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "openvr_api.dll"
    } else if cfg!(target_os = "macos") {
        "libopenvr_api.dylib"
    } else {
        "libopenvr_api.so"
    }
}

type IsHmdPresentFn = unsafe extern "C" fn() -> bool;
type IsRuntimeInstalledFn = unsafe extern "C" fn() -> bool;
type InitInternalFn = unsafe extern "C" fn(*mut i32, i32) -> isize;
type IsInterfaceVersionValidFn = unsafe extern "C" fn(*const c_char) -> bool;
type GetGenericInterfaceFn = unsafe extern "C" fn(*const c_char, *mut i32) -> isize;
type ShutdownInternalFn = unsafe extern "C" fn();

#[repr(C)]
pub struct HmdMatrix34 {
    pub m: [[f32; 4]; 3],
}

#[repr(C)]
pub struct HmdMatrix44 {
    pub m: [[f32; 4]; 4],
}

#[repr(C)]
pub struct DistortionCoordinates {
    pub red: [f32; 2],
    pub green: [f32; 2],
    pub blue: [f32; 2],
}

/// Leading slots of the system interface's function table.
///
/// Declared up to and including `IsDisplayOnDesktop`, the ninth slot and the
/// only one this probe calls. The table uses the runtime's stdcall-on-win32
/// convention for every entry.
#[repr(C)]
pub struct SystemFnTable {
    pub get_recommended_render_target_size: unsafe extern "system" fn(*mut u32, *mut u32),
    pub get_projection_matrix: unsafe extern "system" fn(i32, f32, f32, i32) -> HmdMatrix44,
    pub get_projection_raw:
        unsafe extern "system" fn(i32, *mut f32, *mut f32, *mut f32, *mut f32),
    pub compute_distortion: unsafe extern "system" fn(i32, f32, f32) -> DistortionCoordinates,
    pub get_eye_to_head_transform: unsafe extern "system" fn(i32) -> HmdMatrix34,
    pub get_time_since_last_vsync: unsafe extern "system" fn(*mut f32, *mut u64) -> bool,
    pub get_d3d9_adapter_index: unsafe extern "system" fn() -> i32,
    pub get_dxgi_output_info: unsafe extern "system" fn(*mut i32),
    pub is_display_on_desktop: unsafe extern "system" fn() -> bool,
}

/// [`VrRuntime`] backed by the dynamically loaded native loader.
pub struct NativeRuntime {
    is_hmd_present: IsHmdPresentFn,
    is_runtime_installed: IsRuntimeInstalledFn,
    init_internal: InitInternalFn,
    is_interface_version_valid: IsInterfaceVersionValidFn,
    get_generic_interface: GetGenericInterfaceFn,
    shutdown_internal: ShutdownInternalFn,
    // Keeps the resolved function pointers valid.
    _lib: Library,
}

impl NativeRuntime {
    /// Load the loader library by its platform name, using the dynamic
    /// linker's search path.
    pub fn load() -> Result<Self> {
        Self::load_path(Path::new(default_library_name()))
    }

    /// Load the loader library from an explicit path.
    pub fn load_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading runtime library");
        let lib = unsafe { Library::new(path) }.map_err(|e| ProbeError::LibraryLoad {
            path: PathBuf::from(path),
            message: e.to_string(),
        })?;

        unsafe {
            let is_hmd_present = resolve::<IsHmdPresentFn>(&lib, "VR_IsHmdPresent")?;
            let is_runtime_installed =
                resolve::<IsRuntimeInstalledFn>(&lib, "VR_IsRuntimeInstalled")?;
            let init_internal = resolve::<InitInternalFn>(&lib, "VR_InitInternal")?;
            let is_interface_version_valid =
                resolve::<IsInterfaceVersionValidFn>(&lib, "VR_IsInterfaceVersionValid")?;
            let get_generic_interface =
                resolve::<GetGenericInterfaceFn>(&lib, "VR_GetGenericInterface")?;
            let shutdown_internal = resolve::<ShutdownInternalFn>(&lib, "VR_ShutdownInternal")?;

            Ok(Self {
                is_hmd_present,
                is_runtime_installed,
                init_internal,
                is_interface_version_valid,
                get_generic_interface,
                shutdown_internal,
                _lib: lib,
            })
        }
    }
}

/// Resolve one export, copying the function pointer out of the symbol.
unsafe fn resolve<T: Copy>(lib: &Library, symbol: &'static str) -> Result<T> {
    lib.get::<T>(symbol.as_bytes())
        .map(|s| *s)
        .map_err(|e| ProbeError::MissingExport {
            symbol: symbol.to_string(),
            message: e.to_string(),
        })
}

impl VrRuntime for NativeRuntime {
    fn is_hmd_present(&self) -> bool {
        unsafe { (self.is_hmd_present)() }
    }

    fn is_runtime_installed(&self) -> bool {
        unsafe { (self.is_runtime_installed)() }
    }

    fn init(&self, app_type: ApplicationType) -> (SessionToken, InitError) {
        let mut raw_error: i32 = 0;
        let token = unsafe { (self.init_internal)(&mut raw_error, app_type.as_raw()) };
        (SessionToken::new(token as u64), InitError::from_raw(raw_error))
    }

    fn is_interface_version_valid(&self, version: &str) -> bool {
        let Ok(version) = CString::new(version) else {
            return false;
        };
        unsafe { (self.is_interface_version_valid)(version.as_ptr()) }
    }

    fn system_interface(&self, key: &str) -> (Option<Box<dyn SystemInterface + '_>>, InitError) {
        let Ok(key) = CString::new(key) else {
            return (None, InitError::Unknown);
        };
        let mut raw_error: i32 = 0;
        let addr = unsafe { (self.get_generic_interface)(key.as_ptr(), &mut raw_error) };
        let code = InitError::from_raw(raw_error);
        let table = addr as *const SystemFnTable;
        if table.is_null() {
            return (None, code);
        }
        let interface = NativeSystemInterface {
            table,
            _runtime: PhantomData,
        };
        (Some(Box::new(interface)), code)
    }

    fn shutdown(&self) {
        debug!("shutting down runtime session");
        unsafe { (self.shutdown_internal)() }
    }
}

/// Function-table view handed out by [`NativeRuntime::system_interface`].
///
/// Borrows the runtime so the table pointer cannot outlive the library it
/// points into.
struct NativeSystemInterface<'lib> {
    table: *const SystemFnTable,
    _runtime: PhantomData<&'lib NativeRuntime>,
}

impl SystemInterface for NativeSystemInterface<'_> {
    fn is_display_on_desktop(&self) -> bool {
        // Non-null by construction; see `system_interface`.
        let table = unsafe { &*self.table };
        unsafe { (table.is_display_on_desktop)() }
    }
}
