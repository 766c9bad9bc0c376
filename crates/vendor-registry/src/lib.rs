//! USB vendor ID registry for DeviceBridge
//!
//! Builds, once at startup, the authoritative list of USB vendor IDs the
//! device bridge recognizes as mobile/debug devices: a compiled-in vendor
//! list plus an optional user-editable override file, validated and bounded
//! by a fixed capacity.
//!
//! # Architecture
//!
//! - [`builtin`]: compiled-in vendor IDs and the capacity constant
//! - [`registry`]: `VendorId` and the immutable `VendorRegistry` value
//! - [`builder`]: `RegistryBuilder`, the construction algorithm
//! - [`source`]: override file line reading
//! - [`locate`]: override file path resolution behind a capability trait
//! - [`parse`]: tolerant C-style integer parsing for data lines
//! - [`dump`]: best-effort diagnostic dump of the finished registry
//! - [`error`]: error types for registry construction
//!
//! # Failure semantics
//!
//! A capacity constant too small for the built-in list and (by default) any
//! malformed override line abort the whole load with a typed error; a
//! missing override file and a failing dump sink are not errors. The
//! finished registry is an owned value, immutable after construction, and
//! safe to share with any number of readers.
//!
//! # Example
//!
//! ```
//! use devicebridge_vendor_registry::prelude::*;
//!
//! # fn main() -> devicebridge_vendor_registry::Result<()> {
//! let registry = RegistryBuilder::new().build(None, None)?;
//! assert_eq!(registry.as_slice(), BUILT_IN_VENDOR_IDS);
//! assert!(registry.contains(vendor_ids::GOOGLE));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod builder;
pub mod builtin;
pub mod dump;
pub mod error;
pub mod locate;
pub mod parse;
pub mod prelude;
pub mod registry;
pub mod source;

pub use builder::{InvalidLinePolicy, RegistryBuilder};
pub use builtin::{BUILT_IN_VENDOR_IDS, VENDOR_COUNT_MAX};
pub use error::VendorRegistryError;
pub use locate::{DefaultLocator, FixedLocator, OverrideLocator};
pub use parse::parse_int;
pub use registry::{VendorId, VendorRegistry};
pub use source::OverrideSource;

/// Result type for registry construction
pub type Result<T> = std::result::Result<T, VendorRegistryError>;
