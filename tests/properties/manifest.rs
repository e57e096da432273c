//! Property tests for the RECORD manifest.

use proptest::prelude::*;

use wheelsmith::{ArchivePath, Manifest};

fn archive_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._-]{0,11}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: RECORD has one row per recorded entry plus the trailing placeholder.
    #[test]
    fn property_record_rows(
        entries in proptest::collection::vec(
            (archive_path(), proptest::collection::vec(any::<u8>(), 0..64)),
            0..16,
        )
    ) {
        let mut manifest = Manifest::new(ArchivePath::new("demo-1.0.dist-info/RECORD").unwrap());
        for (path, payload) in &entries {
            manifest.record(ArchivePath::new(path).unwrap(), payload);
        }

        let rendered = manifest.render();
        prop_assert!(rendered.ends_with('\n'));
        let rows: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(rows.len(), entries.len() + 1);
        prop_assert_eq!(*rows.last().unwrap(), "demo-1.0.dist-info/RECORD,,");

        // newest first
        for (row, (path, payload)) in rows.iter().zip(entries.iter().rev()) {
            let expected_prefix = format!("{},sha256=", path);
            let expected_suffix = format!(",{}", payload.len());
            prop_assert!(row.starts_with(&expected_prefix));
            prop_assert!(row.ends_with(&expected_suffix));
        }
    }
}
