//! Vendor ID registry commands

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use devicebridge_vendor_registry::prelude::*;

use crate::commands::VendorCommands;
use crate::error::CliError;
use crate::output;

/// Execute vendors command
pub fn execute(cmd: &VendorCommands, json: bool) -> Result<()> {
    let locator = DefaultLocator;

    match cmd {
        VendorCommands::List { detailed } => list_vendors(&locator, json, *detailed),
        VendorCommands::Check { id } => check_vendor(&locator, id, json),
        VendorCommands::Path => show_path(&locator, json),
        VendorCommands::Dump { output } => dump_registry(&locator, output.as_deref(), json),
    }
}

fn build_registry(locator: &dyn OverrideLocator) -> Result<VendorRegistry> {
    let registry = RegistryBuilder::new()
        .build_from_locator(locator)
        .map_err(CliError::Registry)?;
    Ok(registry)
}

/// List the full registry
fn list_vendors(locator: &dyn OverrideLocator, json: bool, detailed: bool) -> Result<()> {
    let registry = build_registry(locator)?;
    output::print_vendor_list(&registry, json, detailed);
    Ok(())
}

/// Check a single vendor ID for membership
fn check_vendor(locator: &dyn OverrideLocator, id: &str, json: bool) -> Result<()> {
    let raw = parse_int(id)
        .and_then(|value| u32::try_from(value).ok())
        .filter(|raw| *raw <= VendorId::MAX.as_u32())
        .ok_or_else(|| CliError::InvalidArgument(format!("not a vendor ID: {id:?}")))?;
    let vendor = VendorId::new(raw);

    let registry = build_registry(locator)?;
    if !registry.contains(vendor) {
        return Err(CliError::VendorNotRecognized(vendor.to_string()).into());
    }

    output::print_vendor_recognized(vendor, json);
    Ok(())
}

/// Show where the override file lives on this host
fn show_path(locator: &dyn OverrideLocator, json: bool) -> Result<()> {
    let path = locator.locate();
    let exists = path.as_deref().is_some_and(Path::exists);
    output::print_override_path(path.as_deref(), exists, json);
    Ok(())
}

/// Write the registry dump, directive or not
fn dump_registry(
    locator: &dyn OverrideLocator,
    output_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let registry = build_registry(locator)?;

    let path: PathBuf = match output_path {
        Some(path) => path.to_path_buf(),
        None => locator.dump_path().ok_or_else(|| {
            CliError::InvalidArgument("no dump location on this platform; pass --output".into())
        })?,
    };

    let mut file = File::create(&path).map_err(CliError::IoError)?;
    write_dump(&registry, &mut file).map_err(CliError::IoError)?;

    output::print_dump_written(&path, registry.len(), json);
    Ok(())
}
