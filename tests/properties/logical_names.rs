//! Property tests for logical path and effect name derivation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use mapport::domain::services::scanner::effect_name;
use mapport::domain::value_objects::{ItemName, LogicalPath};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Logical path construction never panics on arbitrary input.
    #[test]
    fn property_from_relative_never_panics(s in "(?s).{0,128}") {
        let _ = LogicalPath::from_relative(&s);
    }

    /// PROPERTY: A successful logical path is relative, slash-separated and traversal free.
    #[test]
    fn property_logical_paths_are_normalized(s in "[A-Za-z0-9_./\\\\]{1,64}") {
        if let Ok(path) = LogicalPath::from_relative(&s) {
            let text = path.as_str();
            prop_assert!(!text.starts_with('/'));
            prop_assert!(!text.contains('\\'));
            prop_assert!(!text.contains("//"));
            prop_assert!(!text.split('/').any(|seg| seg == ".."));
        }
    }

    /// PROPERTY: An effect's name is its path under `fx/` without the extension.
    #[test]
    fn property_effect_name_strips_root_and_extension(
        dirs in proptest::collection::vec(segment(), 0..=3),
        stem in segment(),
    ) {
        let root = Path::new("/data/mp_crash/fx");
        let mut file = PathBuf::from(root);
        for dir in &dirs {
            file.push(dir);
        }
        file.push(format!("{}.iw4xFX", stem));

        let mut expected = dirs.clone();
        expected.push(stem);
        prop_assert_eq!(effect_name(root, &file), Some(expected.join("/")));
    }

    /// PROPERTY: Item names match regardless of ASCII case.
    #[test]
    fn property_item_names_ignore_case(name in "mp_[a-z0-9_]{1,16}") {
        let upper = name.to_ascii_uppercase();
        prop_assert!(ItemName::new(name.as_str()).matches(&upper));
        prop_assert_eq!(ItemName::new(name.as_str()), ItemName::new(upper.as_str()));
    }
}
