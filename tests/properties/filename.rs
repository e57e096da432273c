//! Property tests for wheel filenames and dist-info paths.

use proptest::prelude::*;

use wheelsmith::domain::value_objects::CompatibilityTag;
use wheelsmith::PackageIdentity;

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_.]{0,11}").unwrap()
}

fn build_tag() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[0-9][A-Za-z0-9_]{0,5}").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: filename fields appear in order, with the build tag only when set.
    #[test]
    fn property_filename_fields(
        name in token(),
        version in token(),
        build in build_tag(),
        python in token(),
        abi in token(),
        platform in token(),
    ) {
        let mut identity = PackageIdentity::new(&name, &version)
            .with_tag(CompatibilityTag::new(&python, &abi, &platform));
        if let Some(tag) = &build {
            identity = identity.with_build_tag(tag.as_str());
        }

        let filename = identity.filename();
        let stem = filename.strip_suffix(".whl");
        prop_assert!(stem.is_some());

        let fields: Vec<&str> = stem.unwrap().split('-').collect();
        let mut expected = vec![name.as_str(), version.as_str()];
        if let Some(tag) = &build {
            expected.push(tag.as_str());
        }
        expected.extend([python.as_str(), abi.as_str(), platform.as_str()]);
        prop_assert_eq!(fields, expected);
    }

    /// PROPERTY: dist-info entries live under `{name}-{version}.dist-info/`.
    #[test]
    fn property_dist_info_paths(name in token(), version in token()) {
        let identity = PackageIdentity::new(&name, &version);
        let dir = format!("{}-{}.dist-info", name, version);
        prop_assert_eq!(identity.dist_info_dir(), dir.clone());
        let record = identity.record_path().unwrap();
        let metadata = identity.metadata_path().unwrap();
        let wheel = identity.wheel_path().unwrap();
        prop_assert_eq!(record.as_str(), format!("{}/RECORD", dir));
        prop_assert_eq!(metadata.as_str(), format!("{}/METADATA", dir));
        prop_assert_eq!(wheel.as_str(), format!("{}/WHEEL", dir));
    }
}
