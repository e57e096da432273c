//! Property tests for path-mapping normalization.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use wheelsmith::{Category, PathMapper, RawPathEntry, WheelError};

const BASE: &str = "/pkg/root";

fn mapper() -> PathMapper {
    PathMapper::new(Some(Path::new(BASE))).unwrap()
}

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._-]{0,11}").unwrap()
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

fn raw_entry() -> impl Strategy<Value = RawPathEntry> {
    prop_oneof![
        relative_path().prop_map(RawPathEntry::bare),
        (relative_path(), relative_path()).prop_map(|(s, d)| RawPathEntry::pair(s, d)),
    ]
}

fn any_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Scripts),
        Just(Category::Includes),
        Just(Category::Files),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalizing an already-normalized list changes nothing.
    #[test]
    fn property_normalization_idempotent(
        category in any_category(),
        raw in proptest::collection::vec(raw_entry(), 0..8),
    ) {
        let mapper = mapper();
        let once = match mapper.normalize(category, &raw) {
            Ok(entries) => entries,
            // random lists can flatten two entries onto one archive path
            Err(WheelError::DuplicateArchivePath { .. }) => return Ok(()),
            Err(other) => return Err(TestCaseError::fail(other.to_string())),
        };
        let twice = mapper.renormalize(category, &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: scripts and includes flatten to `{prefix}/{basename(dest)}`.
    #[test]
    fn property_flattened_categories(source in relative_path(), dest in relative_path()) {
        let mapper = mapper();
        let basename = dest.rsplit('/').next().unwrap().to_string();
        let raw = [RawPathEntry::pair(&source, &dest)];

        let scripts = mapper.normalize(Category::Scripts, &raw).unwrap();
        prop_assert_eq!(scripts[0].archive.as_str(), format!("scripts/{}", basename));
        prop_assert_eq!(scripts[0].source.clone(), PathBuf::from(&source));

        let includes = mapper.normalize(Category::Includes, &raw).unwrap();
        prop_assert_eq!(includes[0].archive.as_str(), format!("includes/{}", basename));
    }

    /// PROPERTY: generic files keep their relative source as archive path.
    #[test]
    fn property_files_keep_source_path(source in relative_path(), dest in relative_path()) {
        let entries = mapper()
            .normalize(Category::Files, &[RawPathEntry::pair(&source, &dest)])
            .unwrap();
        prop_assert_eq!(entries[0].archive.as_str(), source.as_str());
    }

    /// PROPERTY: absolute sources under the base map like their relative form.
    #[cfg(unix)]
    #[test]
    fn property_absolute_matches_relative(category in any_category(), source in relative_path()) {
        let mapper = mapper();
        let absolute = format!("{}/{}", BASE, source);
        let from_abs = mapper.normalize(category, &[RawPathEntry::bare(&absolute)]).unwrap();
        let from_rel = mapper.normalize(category, &[RawPathEntry::bare(&source)]).unwrap();
        prop_assert_eq!(from_abs, from_rel);
    }

    /// PROPERTY: wrong-shaped entries report their index and length.
    #[test]
    fn property_bad_shape_reported(
        category in any_category(),
        prefix_len in 0usize..4,
        len in prop_oneof![Just(0usize), Just(1), 3usize..6],
    ) {
        let mut raw: Vec<RawPathEntry> = (0..prefix_len)
            .map(|i| RawPathEntry::bare(format!("entry{i}")))
            .collect();
        raw.push(RawPathEntry::Seq(vec![PathBuf::from("x"); len]));
        let err = mapper().normalize(category, &raw).unwrap_err();
        match err {
            WheelError::InvalidPathEntry { category: c, index, len: l } => {
                prop_assert_eq!(c, category);
                prop_assert_eq!(index, prefix_len);
                prop_assert_eq!(l, len);
            }
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: a repeated entry is reported at its second position.
    #[test]
    fn property_repeated_entry_rejected(
        category in any_category(),
        source in relative_path(),
        extra in 0usize..3,
    ) {
        let mut raw = vec![RawPathEntry::bare(&source)];
        raw.extend((0..extra).map(|i| RawPathEntry::bare(format!("{source}-extra{i}"))));
        raw.push(RawPathEntry::bare(&source));
        let err = mapper().normalize(category, &raw).unwrap_err();
        match err {
            WheelError::DuplicateArchivePath { index, .. } => prop_assert_eq!(index, extra + 1),
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: normalization never panics on arbitrary strings.
    #[test]
    fn property_never_panics(category in any_category(), s in "(?s).{0,64}") {
        let _ = mapper().normalize(category, &[RawPathEntry::bare(&s)]);
    }
}
