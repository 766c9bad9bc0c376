//! Diagnostic dump of the final registry.

use std::io::{self, Write};

use crate::registry::VendorRegistry;

/// Write every registry entry to `sink`, one `0x%04x` line per entry,
/// built-in prefix included.
///
/// # Errors
///
/// Returns the first write error. Callers treat dump failures as
/// best-effort: the registry itself is never affected.
pub fn write_dump(registry: &VendorRegistry, sink: &mut dyn Write) -> io::Result<()> {
    for id in registry.iter() {
        writeln!(sink, "{id}")?;
    }
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RegistryBuilder;
    use crate::source::OverrideSource;

    #[test]
    fn dump_lists_every_entry_in_order() {
        let source = OverrideSource::from_lines(["0x2717", "4113"]);
        let registry = match RegistryBuilder::new().build(Some(&source), None) {
            Ok(r) => r,
            Err(e) => panic!("build failed: {e}"),
        };

        let mut sink = Vec::new();
        assert!(write_dump(&registry, &mut sink).is_ok());

        let text = String::from_utf8_lossy(&sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), registry.len());
        assert_eq!(lines.first().copied(), Some("0x18d1"));
        assert_eq!(lines.last().copied(), Some("0x1011"));
    }
}
