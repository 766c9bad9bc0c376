//! Error types for bridgectl CLI

use devicebridge_vendor_registry::VendorRegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Vendor ID not recognized: {0}")]
    VendorNotRecognized(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Registry error: {0}")]
    Registry(#[from] VendorRegistryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
