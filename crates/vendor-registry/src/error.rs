//! Error types for registry construction

use thiserror::Error;

/// Errors that can occur while building the vendor registry
#[derive(Error, Debug)]
pub enum VendorRegistryError {
    /// The capacity constant cannot hold the compiled-in vendor list.
    ///
    /// This is a build misconfiguration, not a runtime data problem; the
    /// caller must not continue with an inconsistent vendor list.
    #[error("registry capacity {capacity} cannot hold the {built_in} built-in vendor IDs")]
    CapacityMisconfigured {
        /// Configured maximum number of entries
        capacity: usize,
        /// Number of compiled-in vendor IDs
        built_in: usize,
    },

    /// An override data line did not contain a parseable integer.
    #[error("invalid vendor ID on override line {line}: {content:?}")]
    InvalidLine {
        /// 1-based line number in the override file
        line: usize,
        /// The offending line, verbatim
        content: String,
    },

    /// An override data line parsed to a value outside `0..=0x7fffffff`.
    #[error("vendor ID {value} on override line {line} is out of range (0..=0x7fffffff)")]
    ValueOutOfRange {
        /// 1-based line number in the override file
        line: usize,
        /// The parsed value
        value: i64,
    },

    /// The override file exists but could not be read.
    #[error("failed to read override file: {0}")]
    Io(#[from] std::io::Error),
}

impl VendorRegistryError {
    /// Whether the caller may reasonably continue with a built-in-only
    /// registry after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::CapacityMisconfigured { .. } => false,
            Self::InvalidLine { .. } => false,
            Self::ValueOutOfRange { .. } => false,
            Self::Io(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_line_context() {
        let err = VendorRegistryError::InvalidLine {
            line: 3,
            content: "notanumber".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("notanumber"));
    }

    #[test]
    fn config_and_data_errors_are_fatal() {
        let config = VendorRegistryError::CapacityMisconfigured {
            capacity: 4,
            built_in: 26,
        };
        let data = VendorRegistryError::ValueOutOfRange { line: 1, value: -1 };
        assert!(!config.is_recoverable());
        assert!(!data.is_recoverable());
    }
}
