//! Registry construction: built-in list plus optional override file.
//!
//! The build is single-pass-per-concern and run-to-completion: seed the
//! built-in prefix, scan the override source for the dump directive, scan
//! it again validating and appending data lines, then emit the diagnostic
//! dump when requested. Each build yields a fresh, independent
//! [`VendorRegistry`] value; there is no shared state between builds.

use std::fs::File;
use std::io::Write;

use tracing::{debug, warn};

use crate::Result;
use crate::builtin::{BUILT_IN_VENDOR_IDS, VENDOR_COUNT_MAX};
use crate::dump::write_dump;
use crate::error::VendorRegistryError;
use crate::locate::OverrideLocator;
use crate::parse::parse_int;
use crate::registry::{VendorId, VendorRegistry};
use crate::source::OverrideSource;

/// What to do with an override line that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidLinePolicy {
    /// Abort the whole load; no partial registry becomes visible.
    #[default]
    Abort,
    /// Drop the line, log it, and keep loading.
    Skip,
}

/// Builds the vendor ID registry.
///
/// ```
/// use devicebridge_vendor_registry::{OverrideSource, RegistryBuilder};
///
/// # fn main() -> devicebridge_vendor_registry::Result<()> {
/// let source = OverrideSource::from_lines(["# third-party vendors", "0x2717"]);
/// let registry = RegistryBuilder::new().build(Some(&source), None)?;
/// assert_eq!(registry.overrides().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    capacity: usize,
    invalid_line_policy: InvalidLinePolicy,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Builder with the production capacity ([`VENDOR_COUNT_MAX`]) and the
    /// abort-on-invalid-line policy.
    pub fn new() -> Self {
        Self {
            capacity: VENDOR_COUNT_MAX,
            invalid_line_policy: InvalidLinePolicy::Abort,
        }
    }

    /// Override the registry capacity. Intended for tests; production
    /// callers keep [`VENDOR_COUNT_MAX`].
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the handling of override lines that fail validation.
    pub fn with_invalid_line_policy(mut self, policy: InvalidLinePolicy) -> Self {
        self.invalid_line_policy = policy;
        self
    }

    /// Build the registry from the built-in list plus `source`.
    ///
    /// `sink` receives the diagnostic dump when the source carries the
    /// dump directive; sink write failures are logged and swallowed.
    ///
    /// # Errors
    ///
    /// [`VendorRegistryError::CapacityMisconfigured`] when the configured
    /// capacity cannot hold the built-in list, and (under the default
    /// [`InvalidLinePolicy::Abort`]) [`VendorRegistryError::InvalidLine`] or
    /// [`VendorRegistryError::ValueOutOfRange`] for a malformed data line.
    pub fn build(
        &self,
        source: Option<&OverrideSource>,
        sink: Option<&mut dyn Write>,
    ) -> Result<VendorRegistry> {
        if self.capacity < BUILT_IN_VENDOR_IDS.len() {
            return Err(VendorRegistryError::CapacityMisconfigured {
                capacity: self.capacity,
                built_in: BUILT_IN_VENDOR_IDS.len(),
            });
        }

        let mut ids: Vec<VendorId> = Vec::with_capacity(self.capacity);
        ids.extend_from_slice(BUILT_IN_VENDOR_IDS);

        // No room for overrides; a valid terminal state, not an error.
        if self.capacity == ids.len() {
            return Ok(VendorRegistry::new(ids, BUILT_IN_VENDOR_IDS.len()));
        }

        let Some(source) = source else {
            debug!("no override source, using built-in vendor list only");
            return Ok(VendorRegistry::new(ids, BUILT_IN_VENDOR_IDS.len()));
        };

        let dump_requested = source.requests_dump();

        for (index, line) in source.lines().enumerate() {
            if line.starts_with('#') {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            if let Some(id) = self.validate_line(index, line)? {
                ids.push(id);
            }

            if ids.len() == self.capacity {
                debug!(
                    capacity = self.capacity,
                    "registry full, ignoring remaining override lines"
                );
                break;
            }
        }

        let registry = VendorRegistry::new(ids, BUILT_IN_VENDOR_IDS.len());
        debug!(
            total = registry.len(),
            overrides = registry.overrides().len(),
            "vendor registry built"
        );

        if dump_requested {
            match sink {
                Some(sink) => {
                    if let Err(err) = write_dump(&registry, sink) {
                        warn!(error = %err, "diagnostic dump failed");
                    }
                }
                None => warn!("diagnostic dump requested but no sink is available"),
            }
        }

        Ok(registry)
    }

    /// Locate, read, and build in one step.
    ///
    /// Absent or unreadable override files degrade to the built-in-only
    /// registry. When the dump directive is present, the dump file is
    /// created at the locator's [`dump_path`](OverrideLocator::dump_path),
    /// best-effort.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build); read errors on an existing file are
    /// downgraded to a warning here.
    pub fn build_from_locator(&self, locator: &dyn OverrideLocator) -> Result<VendorRegistry> {
        let source = match locator.locate() {
            None => None,
            Some(path) => match OverrideSource::open(&path) {
                Ok(found) => found,
                Err(err) => {
                    warn!(
                        path = ?path,
                        error = %err,
                        "override file unreadable, using built-in vendor list only"
                    );
                    None
                }
            },
        };

        let Some(source) = source else {
            return self.build(None, None);
        };

        let mut dump_file = if source.requests_dump() {
            locator
                .dump_path()
                .and_then(|path| match File::create(&path) {
                    Ok(file) => {
                        debug!(path = ?path, "writing diagnostic dump");
                        Some(file)
                    }
                    Err(err) => {
                        warn!(path = ?path, error = %err, "cannot create diagnostic dump file");
                        None
                    }
                })
        } else {
            None
        };

        self.build(
            Some(&source),
            dump_file.as_mut().map(|file| file as &mut dyn Write),
        )
    }

    fn validate_line(&self, index: usize, line: &str) -> Result<Option<VendorId>> {
        let err = match parse_int(line) {
            Some(value) => match u32::try_from(value) {
                Ok(raw) if raw <= VendorId::MAX.as_u32() => {
                    return Ok(Some(VendorId::new(raw)));
                }
                _ => VendorRegistryError::ValueOutOfRange {
                    line: index + 1,
                    value,
                },
            },
            None => VendorRegistryError::InvalidLine {
                line: index + 1,
                content: line.to_string(),
            },
        };

        match self.invalid_line_policy {
            InvalidLinePolicy::Abort => Err(err),
            InvalidLinePolicy::Skip => {
                warn!(error = %err, "skipping invalid override line");
                Ok(None)
            }
        }
    }
}
