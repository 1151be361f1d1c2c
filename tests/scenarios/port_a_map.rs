//! Scenario: Porting a stock map
//!
//! Journey: A modder ports `mp_crash` from IW3 to IW4x.
//!
//! Steps:
//! 1. Lists the maps the IW3 install offers
//! 2. Exports `mp_crash`, which extracts it and writes its zone source
//! 3. Builds the zone the export suggested
//! 4. Exports again; hand-edited scripts survive
//! 5. Packs the built map's images into an IWD

use crate::common::*;

/// SCENARIO: Export, build and package one map
#[test]
fn scenario_port_stock_map() {
    let env = TestEnv::builder()
        .configured()
        .stock_map("mp_crash")
        .export_script(EXPORT_SCRIPT_OK)
        .build_script(&format!(
            "{}mkdir -p \"usermaps/$1\"\ntouch \"usermaps/$1/$1.ff\"\n",
            BUILD_SCRIPT
        ))
        .build();

    // Step 1
    let result = env.run(&["list"]);
    assert!(result.stdout.contains("mp_crash"), "{}", result.combined_output());

    // Step 2
    let result = env.run(&["export", "mp_crash"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Ready to build: mapport build mp_crash"));

    // Step 3
    let result = env.run(&["build", "mp_crash"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.target_path("usermaps/mp_crash/mp_crash.ff").exists());

    // Step 4
    let edited = "main()\n{\n\tlevel.edited = true;\n}\n";
    env.write_target_file("zone_raw/mp_crash/maps/mp/mp_crash_fx.gsc", edited);
    let result = env.run(&["export", "mp_crash"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.read_target_file("zone_raw/mp_crash/maps/mp/mp_crash_fx.gsc"),
        edited
    );

    // Step 5
    env.write_target_file("zone_raw/mp_crash/images/loadscreen_mp_crash.iwi", "img");
    let result = env.run(&["package", "mp_crash"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.target_path("usermaps/mp_crash/mp_crash.iwd").exists());
}
