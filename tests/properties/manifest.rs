//! Property tests for zone source generation.

use proptest::prelude::*;

use mapport::domain::entities::{AssetItem, ScanResult};
use mapport::domain::services::{ManifestGenerator, TemplateSet};
use mapport::domain::value_objects::MapCategory;

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z0-9_/]{1,20}").unwrap(),
        0..8,
    )
}

fn scan() -> impl Strategy<Value = ScanResult> {
    (names(), names(), names(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(effects, sounds, scripts, has_minigun, has_sun, has_vision)| ScanResult {
            scripts: scripts
                .into_iter()
                .map(|s| format!("maps/mp/{}.gsc", s))
                .collect(),
            effects,
            sounds,
            has_minigun,
            has_sun,
            has_vision,
            ..ScanResult::default()
        },
    )
}

fn generator() -> ManifestGenerator {
    ManifestGenerator::new(TemplateSet::default()).with_version("0.0.0")
}

fn item() -> AssetItem {
    AssetItem::new("mp_crash", MapCategory::Multiplayer, "/iw4x/zone_raw/mp_crash")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Discovery order never leaks into the manifest.
    #[test]
    fn property_manifest_ignores_scan_order(
        (scan, shuffled) in scan().prop_flat_map(|scan| {
            let effects = Just(scan.effects.clone()).prop_shuffle();
            let sounds = Just(scan.sounds.clone()).prop_shuffle();
            let scripts = Just(scan.scripts.clone()).prop_shuffle();
            (Just(scan), effects, sounds, scripts).prop_map(|(scan, effects, sounds, scripts)| {
                let shuffled = ScanResult { effects, sounds, scripts, ..scan.clone() };
                (scan, shuffled)
            })
        })
    ) {
        let a = generator().generate(&item(), &scan);
        let b = generator().generate(&item(), &shuffled);
        prop_assert_eq!(a.source(), b.source());
    }

    /// PROPERTY: Every rendered line is blank, a comment or a `name,value` directive.
    #[test]
    fn property_manifest_lines_are_well_formed(scan in scan()) {
        let project = generator().generate(&item(), &scan);
        let source = project.source();
        prop_assert!(source.ends_with('\n'));
        for line in source.lines() {
            prop_assert!(
                line.is_empty() || line.starts_with('#') || line.contains(','),
                "unexpected line: {:?}",
                line
            );
        }
    }

    /// PROPERTY: Each discovered sound appears exactly once.
    #[test]
    fn property_sounds_are_deduplicated(scan in scan()) {
        let project = generator().generate(&item(), &scan);
        for sound in &scan.sounds {
            let directive = format!("sound,{}", sound);
            let count = project.source().lines().filter(|l| *l == directive).count();
            prop_assert_eq!(count, 1);
        }
    }
}
