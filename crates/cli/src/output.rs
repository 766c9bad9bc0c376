//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde_json::json;
use std::path::Path;

use devicebridge_vendor_registry::{VendorId, VendorRegistry};

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the registry in specified format
pub fn print_vendor_list(registry: &VendorRegistry, json: bool, detailed: bool) {
    if json {
        let output = if detailed {
            json!({
                "success": true,
                "built_in": registry.built_in(),
                "overrides": registry.overrides(),
            })
        } else {
            json!({
                "success": true,
                "vendors": registry.as_slice(),
            })
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format vendor list as JSON: {e}"),
        }
        return;
    }

    println!(
        "{} ({} entries)",
        "Recognized USB vendors:".bold(),
        registry.len()
    );
    for (index, id) in registry.iter().enumerate() {
        if detailed {
            let origin = if index < registry.built_in_len() {
                "built-in".green()
            } else {
                "override".cyan()
            };
            println!("  {id}  [{origin}]");
        } else {
            println!("  {id}");
        }
    }
}

/// Print the result of a membership check
pub fn print_vendor_recognized(id: VendorId, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "vendor_id": id,
            "recognized": true,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format check result as JSON: {e}"),
        }
    } else {
        println!("{id} {}", "recognized".green());
    }
}

/// Print the resolved override file path
pub fn print_override_path(path: Option<&Path>, exists: bool, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "path": path,
            "exists": exists,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format path as JSON: {e}"),
        }
        return;
    }

    match path {
        Some(path) if exists => println!("{}", path.display()),
        Some(path) => println!("{} {}", path.display(), "(not present)".yellow()),
        None => println!("{}", "No override file location on this platform".yellow()),
    }
}

/// Print confirmation of a written dump file
pub fn print_dump_written(path: &Path, entries: usize, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "path": path,
            "entries": entries,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format dump result as JSON: {e}"),
        }
    } else {
        println!(
            "{} {} ({} entries)",
            "Wrote".green(),
            path.display(),
            entries
        );
    }
}
