//! Vendor ID and registry value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A USB vendor identifier.
///
/// A 32-bit non-negative integer with no internal structure. Override files
/// cap the value at [`VendorId::MAX`]; the built-in list stays well below
/// that. Displays in the `0x%04x` form used by the diagnostic dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(u32);

impl VendorId {
    /// Largest value an override entry may carry (`i32::MAX` in the
    /// override file format).
    pub const MAX: VendorId = VendorId(0x7fff_ffff);

    /// Wrap a raw vendor ID value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

impl From<u32> for VendorId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<VendorId> for u32 {
    fn from(id: VendorId) -> Self {
        id.0
    }
}

/// The final ordered, capacity-bounded vendor ID list.
///
/// Built once at startup by [`RegistryBuilder`](crate::RegistryBuilder) and
/// immutable afterwards. The built-in vendors always occupy the prefix, in
/// their compiled-in order; entries contributed by an override file follow
/// in file order. Entries are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorRegistry {
    ids: Vec<VendorId>,
    built_in_len: usize,
}

impl VendorRegistry {
    pub(crate) fn new(ids: Vec<VendorId>, built_in_len: usize) -> Self {
        debug_assert!(built_in_len <= ids.len());
        Self { ids, built_in_len }
    }

    /// Number of entries, built-in prefix included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True only for a registry with no entries at all; never the case for
    /// a registry produced by the builder.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All entries in registry order.
    pub fn as_slice(&self) -> &[VendorId] {
        &self.ids
    }

    /// Iterate over all entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = VendorId> + '_ {
        self.ids.iter().copied()
    }

    /// Whether `id` is a recognized vendor.
    pub fn contains(&self, id: VendorId) -> bool {
        self.ids.contains(&id)
    }

    /// Length of the built-in prefix.
    pub fn built_in_len(&self) -> usize {
        self.built_in_len
    }

    /// The built-in prefix.
    pub fn built_in(&self) -> &[VendorId] {
        self.ids.get(..self.built_in_len).unwrap_or_default()
    }

    /// Entries contributed by the override file, in file order.
    pub fn overrides(&self) -> &[VendorId] {
        self.ids.get(self.built_in_len..).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a VendorRegistry {
    type Item = &'a VendorId;
    type IntoIter = std::slice::Iter<'a, VendorId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
