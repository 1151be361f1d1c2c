//! Fixed file templates
//!
//! `MAPNAME` and `AMBIENT` are the only placeholders.

use crate::domain::value_objects::RequiredScript;

/// Ambient sound used when nothing else is configured
pub const DEFAULT_AMBIENT: &str = "ambient_mp_rural";

/// Load-screen material descriptor, relative to the data directory
pub const MATERIAL_PATH: &str = "materials/$levelbriefing.iw4x.json";

const MATERIAL_TEMPLATE: &str = r#"{
    "name": "$levelbriefing",
    "techniqueSet->name": "2d",
    "gameFlags": 0,
    "sortKey": 0,
    "animationX": 1,
    "animationY": 1,
    "surfaceTypeBits": 0,
    "stateFlags": 3,
    "cameraRegion": 4,
    "maps": [
        {
            "typeHash": 2695565377,
            "firstCharacter": 99,
            "lastCharacter": 112,
            "sampleState": 98,
            "semantic": 0,
            "image": "loadscreen_MAPNAME"
        }
    ],
    "stateMap": [
        {
            "loadBits": [
                1610679397,
                0
            ]
        }
    ]
}
"#;

const MAIN_SCRIPT_TEMPLATE: &str = r#"main()
{
	maps\mp\MAPNAME_fx::main();
	maps\createart\MAPNAME_art::main();
	maps\mp\_load::main();

	ambientPlay( "AMBIENT" );

	game["attackers"] = "allies";
	game["defenders"] = "axis";

	maps\mp\_compass::setupMiniMap( "compass_map_MAPNAME" );

	setdvar( "r_specularcolorscale", "1" );
	setdvar( "compassmaxrange", "2000" );
}
"#;

const CREATEFX_TEMPLATE: &str = r#"//_createfx generated. Do not touch!
#include common_scripts\utility;
#include common_scripts\_createfx;

main()
{

}
"#;

const EMPTY_SCRIPT_TEMPLATE: &str = r#"main()
{

}
"#;

/// Template text with the map-specific values filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    ambient: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new(DEFAULT_AMBIENT)
    }
}

impl TemplateSet {
    pub fn new(ambient: impl Into<String>) -> Self {
        Self {
            ambient: ambient.into(),
        }
    }

    pub fn ambient(&self) -> &str {
        &self.ambient
    }

    pub fn material(&self, map_name: &str) -> String {
        MATERIAL_TEMPLATE.replace("MAPNAME", map_name)
    }

    /// Stub content for a required script that is absent
    pub fn stub_script(&self, script: RequiredScript, map_name: &str) -> String {
        match script {
            RequiredScript::Main => MAIN_SCRIPT_TEMPLATE
                .replace("MAPNAME", map_name)
                .replace("AMBIENT", &self.ambient),
            RequiredScript::CreateFx => CREATEFX_TEMPLATE.to_string(),
            RequiredScript::MainFx | RequiredScript::CreateArt => EMPTY_SCRIPT_TEMPLATE.to_string(),
        }
    }
}
