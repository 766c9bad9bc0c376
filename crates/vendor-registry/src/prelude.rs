//! Flat re-exports for registry consumers.

pub use crate::builder::{InvalidLinePolicy, RegistryBuilder};
pub use crate::builtin::{BUILT_IN_VENDOR_IDS, VENDOR_COUNT_MAX, vendor_ids};
pub use crate::dump::write_dump;
pub use crate::error::VendorRegistryError;
pub use crate::locate::{DefaultLocator, FixedLocator, OverrideLocator};
pub use crate::registry::{VendorId, VendorRegistry};
pub use crate::source::{DUMP_DIRECTIVE, MAX_LINE_LEN, OverrideSource};
pub use crate::{Result, parse_int};
