//! End-to-end registry construction against real override files

use std::fs;
use std::path::PathBuf;

use devicebridge_vendor_registry::prelude::*;
use tempfile::TempDir;

fn must<T, E: std::fmt::Debug>(r: std::result::Result<T, E>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("unexpected Err: {e:?}"),
    }
}

fn write_override(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("usb_vendors.ini");
    must(fs::write(&path, contents));
    path
}

mod locator_chain {
    use super::*;

    #[test]
    fn absent_locator_degrades_to_built_in_only() {
        let registry = must(RegistryBuilder::new().build_from_locator(&FixedLocator::absent()));
        assert_eq!(registry.as_slice(), BUILT_IN_VENDOR_IDS);
    }

    #[test]
    fn located_but_missing_file_degrades_to_built_in_only() {
        let dir = must(TempDir::new());
        let locator = FixedLocator::new(dir.path().join("usb_vendors.ini"));

        let registry = must(RegistryBuilder::new().build_from_locator(&locator));
        assert_eq!(registry.as_slice(), BUILT_IN_VENDOR_IDS);
        assert_eq!(registry.len(), registry.built_in_len());
    }

    #[test]
    fn override_file_is_read_through_the_locator() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "# extras\n0x2717\n4113\n");
        let locator = FixedLocator::new(path);

        let registry = must(RegistryBuilder::new().build_from_locator(&locator));
        assert_eq!(
            registry.overrides(),
            &[VendorId::new(0x2717), VendorId::new(4113)]
        );
    }
}

mod end_to_end_scenarios {
    use super::*;

    // Override file with a directive and two entries: registry is the
    // built-in list plus both entries in file order, and the dump carries
    // one line per entry, built-in prefix included.
    #[test]
    fn directive_plus_two_entries() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "#dbgOut\n0x2717\n4113\n");
        let locator = FixedLocator::new(path);

        let registry = must(RegistryBuilder::new().build_from_locator(&locator));

        let mut expected: Vec<VendorId> = BUILT_IN_VENDOR_IDS.to_vec();
        expected.push(VendorId::new(0x2717));
        expected.push(VendorId::new(4113));
        assert_eq!(registry.as_slice(), expected.as_slice());

        let dump = must(fs::read_to_string(dir.path().join("vids.ini")));
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), registry.len());
        assert_eq!(lines.first().copied(), Some("0x18d1"));
        assert_eq!(lines.last().copied(), Some("0x1011"));
    }

    #[test]
    fn no_directive_means_no_dump_file() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "0x2717\n");
        let locator = FixedLocator::new(path);

        let registry = must(RegistryBuilder::new().build_from_locator(&locator));
        assert_eq!(registry.overrides(), &[VendorId::new(0x2717)]);
        assert!(!dir.path().join("vids.ini").exists());
    }

    #[test]
    fn extra_valid_line_beyond_capacity_is_ignored() {
        let room = VENDOR_COUNT_MAX - BUILT_IN_VENDOR_IDS.len();
        let mut contents = String::new();
        for i in 0..room {
            contents.push_str(&format!("{i}\n"));
        }
        contents.push_str("0x9999\n");

        let dir = must(TempDir::new());
        let path = write_override(&dir, &contents);
        let locator = FixedLocator::new(path);

        let registry = must(RegistryBuilder::new().build_from_locator(&locator));
        assert_eq!(registry.len(), VENDOR_COUNT_MAX);
        assert!(!registry.contains(VendorId::new(0x9999)));
    }

    #[test]
    fn malformed_line_aborts_the_whole_load() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "0x2717\nnotanumber\n4113\n");
        let locator = FixedLocator::new(path);

        let result = RegistryBuilder::new().build_from_locator(&locator);
        match result {
            Err(VendorRegistryError::InvalidLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "notanumber");
            }
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_value_aborts_the_whole_load() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "-1\n");
        let locator = FixedLocator::new(path);

        let result = RegistryBuilder::new().build_from_locator(&locator);
        assert!(matches!(
            result,
            Err(VendorRegistryError::ValueOutOfRange { line: 1, value: -1 })
        ));
    }

    #[test]
    fn rebuilds_are_independent_values() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "0x2717\n");
        let locator = FixedLocator::new(path.clone());
        let builder = RegistryBuilder::new();

        let first = must(builder.build_from_locator(&locator));

        must(fs::write(&path, "4113\n"));
        let second = must(builder.build_from_locator(&locator));

        assert_eq!(first.overrides(), &[VendorId::new(0x2717)]);
        assert_eq!(second.overrides(), &[VendorId::new(4113)]);
    }
}

mod dump_behavior {
    use super::*;

    #[test]
    fn unwritable_dump_location_does_not_fail_the_build() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "#dbgOut\n0x2717\n");
        // Occupy the dump path with a directory so File::create fails.
        must(fs::create_dir(dir.path().join("vids.ini")));
        let locator = FixedLocator::new(path);

        let registry = must(RegistryBuilder::new().build_from_locator(&locator));
        assert_eq!(registry.overrides(), &[VendorId::new(0x2717)]);
    }

    #[test]
    fn directive_anywhere_in_the_file_triggers_the_dump() {
        let dir = must(TempDir::new());
        let path = write_override(&dir, "0x2717\n# note\n#dbgOut\n");
        let locator = FixedLocator::new(path);

        must(RegistryBuilder::new().build_from_locator(&locator));
        assert!(dir.path().join("vids.ini").exists());
    }
}
