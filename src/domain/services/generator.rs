//! Manifest Generator
//!
//! Turns a [`ScanResult`] into a [`ManifestProject`]. Generation is pure:
//! identical scans give byte-identical manifests and nothing is written.
//!
//! Block order is fixed because ZoneBuilder loads assets in the order they
//! are listed:
//! 1. `require,minigun` when the marker exists
//! 2. header comment, map directives, compass material
//! 3. `# GSC`: the four required scripts, then any other discovered script
//! 4. `# Rawfiles`: sky and vision files
//! 5. `# FX`, `# Sounds`, `# GSC Models & Destructibles`

use std::path::Path;

use crate::domain::entities::{
    AssetItem, AuxiliaryFile, AuxiliaryKind, Directive, ManifestDocument, ManifestProject,
    ScanResult,
};
use crate::domain::services::scanner::{join_logical, sun_path, vision_path};
use crate::domain::services::templates::{TemplateSet, MATERIAL_PATH};
use crate::domain::value_objects::{LogicalPath, RequiredScript};

/// Map-loading directives, each pointing at the compiled BSP
const MAP_DIRECTIVES: [&str; 6] = [
    "map_ents",
    "col_map_mp",
    "fx_map",
    "com_map",
    "game_map_mp",
    "gfx_map",
];

pub const SECTION_GSC: &str = "GSC";
pub const SECTION_RAWFILES: &str = "Rawfiles";
pub const SECTION_FX: &str = "FX";
pub const SECTION_SOUNDS: &str = "Sounds";
pub const SECTION_MODELS: &str = "GSC Models & Destructibles";

/// Model name from an `additionalModels.txt` line
pub fn model_name(line: &str) -> String {
    let trimmed = line.trim();
    LogicalPath::from_relative(trimmed)
        .map(|p| p.without_extension().file_name().to_string())
        .unwrap_or_else(|_| {
            let last = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
            Path::new(last)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| last.to_string())
        })
}

#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    templates: TemplateSet,
    version: String,
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new(TemplateSet::default())
    }
}

impl ManifestGenerator {
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version printed in the header
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn generate(&self, item: &AssetItem, scan: &ScanResult) -> ManifestProject {
        let document = self.document(item.name(), scan);
        let auxiliary = self.auxiliary_files(item, scan);
        ManifestProject::new(item.clone(), document, auxiliary)
    }

    /// Manifest lines only
    pub fn document(&self, map_name: &str, scan: &ScanResult) -> ManifestDocument {
        let mut doc = ManifestDocument::new();

        if scan.has_minigun {
            doc.directive("require", "minigun");
        }

        self.header(&mut doc, map_name);

        let required: Vec<String> = RequiredScript::ALL
            .iter()
            .map(|s| s.logical_path(map_name))
            .collect();
        doc.blank().comment(SECTION_GSC);
        for path in &required {
            doc.directive("rawfile", path.as_str());
        }
        let mut extra: Vec<&String> = scan
            .scripts
            .iter()
            .filter(|s| !required.contains(s))
            .collect();
        extra.sort();
        extra.dedup();
        for script in extra {
            doc.directive("rawfile", script.as_str());
        }

        let mut rawfiles = Vec::new();
        if scan.has_sun {
            rawfiles.push(Directive::new("rawfile", sun_path(map_name)));
        }
        if scan.has_vision {
            rawfiles.push(Directive::new("rawfile", vision_path(map_name)));
        }
        doc.section(SECTION_RAWFILES, rawfiles);

        doc.section(SECTION_FX, sorted_directives("fx", &scan.effects));
        doc.section(SECTION_SOUNDS, sorted_directives("sound", &scan.sounds));
        doc.section(
            SECTION_MODELS,
            scan.additional_models
                .iter()
                .filter(|l| !l.trim().is_empty())
                .map(|l| Directive::new("xmodel", model_name(l)))
                .collect(),
        );

        doc
    }

    fn header(&self, doc: &mut ManifestDocument, map_name: &str) {
        doc.rule()
            .comment("This source is intended to work with IW4x ZoneBuilder!")
            .comment(format!("It should build the map {}.ff", map_name))
            .comment(format!("Generated with mapport {}", self.version))
            .rule()
            .blank();

        let bsp = format!("maps/mp/{}.d3dbsp", map_name);
        for name in MAP_DIRECTIVES {
            doc.directive(name, bsp.as_str());
        }
        doc.blank()
            .directive("material", format!("compass_map_{}", map_name));
    }

    /// Material descriptor plus a stub for every missing required script
    fn auxiliary_files(&self, item: &AssetItem, scan: &ScanResult) -> Vec<AuxiliaryFile> {
        let name = item.name();
        let mut files = vec![AuxiliaryFile::new(
            join_logical(item.data_dir(), MATERIAL_PATH),
            self.templates.material(name),
            AuxiliaryKind::MaterialDescriptor,
        )];
        files.extend(scan.missing_scripts.iter().map(|&script| {
            AuxiliaryFile::new(
                join_logical(item.data_dir(), &script.logical_path(name)),
                self.templates.stub_script(script, name),
                AuxiliaryKind::StubScript(script),
            )
        }));
        files
    }
}

fn sorted_directives(name: &str, values: &[String]) -> Vec<Directive> {
    let mut values: Vec<&String> = values.iter().collect();
    values.sort();
    values.dedup();
    values
        .into_iter()
        .map(|v| Directive::new(name, v.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RULE;
    use crate::domain::value_objects::MapCategory;
    use std::path::Path;

    fn item() -> AssetItem {
        AssetItem::new("mp_crash", MapCategory::Multiplayer, "/raw/mp_crash")
    }

    fn generator() -> ManifestGenerator {
        ManifestGenerator::new(TemplateSet::default()).with_version("1.0.0")
    }

    fn bare_manifest() -> String {
        format!(
            "{RULE}\n\
# This source is intended to work with IW4x ZoneBuilder!\n\
# It should build the map mp_crash.ff\n\
# Generated with mapport 1.0.0\n\
{RULE}\n\
\n\
map_ents,maps/mp/mp_crash.d3dbsp\n\
col_map_mp,maps/mp/mp_crash.d3dbsp\n\
fx_map,maps/mp/mp_crash.d3dbsp\n\
com_map,maps/mp/mp_crash.d3dbsp\n\
game_map_mp,maps/mp/mp_crash.d3dbsp\n\
gfx_map,maps/mp/mp_crash.d3dbsp\n\
\n\
material,compass_map_mp_crash\n\
\n\
# GSC\n\
rawfile,maps/mp/mp_crash.gsc\n\
rawfile,maps/mp/mp_crash_fx.gsc\n\
rawfile,maps/createfx/mp_crash_fx.gsc\n\
rawfile,maps/createart/mp_crash_art.gsc\n"
        )
    }

    #[test]
    fn bare_scan_gives_header_and_base_scripts_only() {
        let project = generator().generate(&item(), &ScanResult::default());
        assert_eq!(project.source(), bare_manifest());
    }

    #[test]
    fn minigun_requirement_comes_first() {
        let scan = ScanResult {
            has_minigun: true,
            ..Default::default()
        };
        let project = generator().generate(&item(), &scan);
        assert!(project.source().starts_with("require,minigun\n########"));
    }

    #[test]
    fn single_sound_scenario() {
        let scan = ScanResult {
            sounds: vec!["explosion".to_string()],
            ..Default::default()
        };
        let project = generator().generate(&item(), &scan);

        let expected = format!("{}\n# Sounds\nsound,explosion\n", bare_manifest());
        assert_eq!(project.source(), expected);
        assert_eq!(
            project
                .document()
                .directives()
                .filter(|d| d.name() == "sound")
                .count(),
            1
        );
    }

    #[test]
    fn blocks_follow_fixed_order() {
        let scan = ScanResult {
            scripts: vec![
                "maps/mp/mp_crash.gsc".to_string(),
                "maps/mp/_destructibles/car.gsc".to_string(),
            ],
            effects: vec!["foo/bar".to_string()],
            sounds: vec!["wind".to_string()],
            additional_models: vec!["props/barrel.xmodel".to_string(), "  ".to_string()],
            has_sun: true,
            has_vision: true,
            ..Default::default()
        };
        let source = generator().generate(&item(), &scan).source().to_string();

        let tail = source
            .strip_prefix(&bare_manifest())
            .expect("header and base scripts first");
        assert_eq!(
            tail,
            "rawfile,maps/mp/_destructibles/car.gsc\n\
\n# Rawfiles\nrawfile,sun/mp_crash.sun\nrawfile,vision/mp_crash.vision\n\
\n# FX\nfx,foo/bar\n\
\n# Sounds\nsound,wind\n\
\n# GSC Models & Destructibles\nxmodel,barrel\n"
        );
    }

    #[test]
    fn base_scripts_are_not_repeated() {
        let scan = ScanResult {
            scripts: RequiredScript::ALL
                .iter()
                .map(|s| s.logical_path("mp_crash"))
                .collect(),
            ..Default::default()
        };
        let project = generator().generate(&item(), &scan);
        assert_eq!(project.source(), bare_manifest());
    }

    #[test]
    fn material_descriptor_always_scheduled() {
        let project = generator().generate(&item(), &ScanResult::default());
        let material = &project.auxiliary_files()[0];

        assert_eq!(material.kind(), AuxiliaryKind::MaterialDescriptor);
        assert_eq!(
            material.path(),
            Path::new("/raw/mp_crash/materials/$levelbriefing.iw4x.json")
        );
        assert!(material.content().contains("loadscreen_mp_crash"));
    }

    #[test]
    fn stubs_only_for_missing_scripts() {
        let scan = ScanResult {
            missing_scripts: vec![RequiredScript::Main, RequiredScript::CreateArt],
            ..Default::default()
        };
        let project = generator().generate(&item(), &scan);
        let stubs: Vec<_> = project.stub_scripts().map(|f| f.kind()).collect();

        assert_eq!(
            stubs,
            vec![
                AuxiliaryKind::StubScript(RequiredScript::Main),
                AuxiliaryKind::StubScript(RequiredScript::CreateArt),
            ]
        );
        let main = project.stub_scripts().next().unwrap();
        assert_eq!(main.path(), Path::new("/raw/mp_crash/maps/mp/mp_crash.gsc"));
        assert!(main.content().contains("ambient_mp_rural"));
    }

    #[test]
    fn nothing_missing_means_no_stubs() {
        let project = generator().generate(&item(), &ScanResult::default());
        assert_eq!(project.stub_scripts().count(), 0);
        assert_eq!(project.auxiliary_files().len(), 1);
    }

    #[test]
    fn model_name_strips_directory_and_extension() {
        assert_eq!(model_name("com_barrel_green.xmodel"), "com_barrel_green");
        assert_eq!(model_name(r"props\tree.xmodel "), "tree");
        assert_eq!(model_name("plain"), "plain");
    }

    #[test]
    fn model_name_with_parent_reference_keeps_only_the_stem() {
        assert_eq!(model_name("../x.xmodel"), "x");
        assert_eq!(model_name(r"..\props\tree.xmodel"), "tree");
    }

    #[test]
    fn unsorted_scan_lists_render_sorted() {
        let scan = ScanResult {
            effects: vec!["b/z".to_string(), "a/y".to_string()],
            ..Default::default()
        };
        let doc = generator().document("mp_crash", &scan);
        let fx: Vec<&str> = doc
            .directives()
            .filter(|d| d.name() == "fx")
            .map(|d| d.value())
            .collect();
        assert_eq!(fx, vec!["a/y", "b/z"]);
    }
}
