//! Locating the override file on the host platform.
//!
//! Path resolution is a capability injected into the builder so registry
//! construction stays deterministic under test. [`DefaultLocator`] is the
//! production chain; [`FixedLocator`] pins a path (or its absence).

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the whole lookup chain.
pub const OVERRIDE_ENV_VAR: &str = "DEVICEBRIDGE_VENDOR_PATH";

/// Per-user configuration directory, under the home directory.
pub const OVERRIDE_DIR: &str = ".devicebridge";

/// File name of the vendor ID override file.
pub const OVERRIDE_FILE_NAME: &str = "usb_vendors.ini";

/// File name of the diagnostic dump, placed next to the override file.
pub const DUMP_FILE_NAME: &str = "vids.ini";

/// Supplies the override file path, or signals that no override is
/// available. Both outcomes are legitimate non-error inputs to the builder.
pub trait OverrideLocator {
    /// Path the override file would live at, or `None` when the platform
    /// offers no usable location. The file need not exist.
    fn locate(&self) -> Option<PathBuf>;

    /// Where the diagnostic dump should land: [`DUMP_FILE_NAME`] alongside
    /// the override file.
    fn dump_path(&self) -> Option<PathBuf> {
        let mut path = self.locate()?;
        path.set_file_name(DUMP_FILE_NAME);
        Some(path)
    }
}

/// Production lookup chain: explicit environment override first, then the
/// per-user configuration directory (the executable's directory on
/// Windows, where the tool ships as a portable bundle).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocator;

impl OverrideLocator for DefaultLocator {
    fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = env::var_os(OVERRIDE_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        #[cfg(windows)]
        {
            let exe = env::current_exe().ok()?;
            Some(exe.parent()?.join(OVERRIDE_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            Some(dirs::home_dir()?.join(OVERRIDE_DIR).join(OVERRIDE_FILE_NAME))
        }
    }
}

/// Locator pinned to a fixed path, or to no path at all.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator {
    path: Option<PathBuf>,
}

impl FixedLocator {
    /// Locator that always resolves to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Locator that reports no override available.
    pub fn absent() -> Self {
        Self { path: None }
    }
}

impl OverrideLocator for FixedLocator {
    fn locate(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
