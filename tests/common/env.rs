//! Test environment builder for isolated mapport testing.
//!
//! Provides `TestEnv` - fake IW3 and IW4x installs under one temp directory,
//! a project directory holding `mapport.toml`, and helpers to run the CLI.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a mapport CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Holds `cod4/` and `iw4x/`
    pub games: TempDir,
    /// Working directory for the CLI (contains `mapport.toml`)
    pub project_root: TempDir,
    /// Stand-in for the user config directory
    pub config_home: TempDir,
    mapport_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn source_game(&self) -> PathBuf {
        self.games.path().join("cod4")
    }

    pub fn target_game(&self) -> PathBuf {
        self.games.path().join("iw4x")
    }

    /// Path under the IW4x install
    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target_game().join(relative)
    }

    pub fn read_target_file(&self, relative: &str) -> String {
        let path = self.target_path(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn write_target_file(&self, relative: &str, content: &str) {
        write_file(&self.target_path(relative), content);
    }

    /// Run mapport from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.mapport_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("MAPPORT_CONFIG_HOME", self.config_home.path())
            .env_remove("MAPPORT_SOURCE_GAME")
            .env_remove("MAPPORT_TARGET_GAME")
            .env_remove("RUST_LOG");

        let output = cmd.output().expect("Failed to execute mapport");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    write_file(path, &format!("#!/bin/sh\n{}", body));
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn write_script(path: &Path, body: &str) {
    write_file(path, body);
}

/// Converter stand-in: `$1` is the destination, `$2` the map name.
///
/// Writes the map's main script and one sound, like a real extraction.
pub const EXPORT_SCRIPT_OK: &str = r#"dest="$1"
map="$2"
echo "dumping $map"
mkdir -p "$dest/maps/mp" "$dest/sounds"
printf 'main()\n{\n}\n' > "$dest/maps/mp/$map.gsc"
echo '{}' > "$dest/sounds/ambient_$map.json"
"#;

/// Build tool stand-in: `$1` is the zone; fails for zones named `mp_broken`.
pub const BUILD_SCRIPT: &str = r#"zone="$1"
echo "building $zone"
if [ "$zone" = "mp_broken" ]; then
  echo "bad asset" >&2
  exit 3
fi
"#;

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    stock_maps: Vec<String>,
    usermaps: Vec<String>,
    zone_sources: Vec<String>,
    export_script: Option<String>,
    build_script: Option<String>,
    extra_config: String,
    configure_paths: bool,
}

impl TestEnvBuilder {
    /// Write `mapport.toml` pointing at the fake installs
    pub fn configured(mut self) -> Self {
        self.configure_paths = true;
        self
    }

    /// `zone/english/<name>.ff` in the IW3 install
    pub fn stock_map(mut self, name: &str) -> Self {
        self.stock_maps.push(name.to_string());
        self
    }

    /// `usermaps/<name>/<name>.ff` in the IW3 install
    pub fn usermap(mut self, name: &str) -> Self {
        self.usermaps.push(name.to_string());
        self
    }

    /// `zone_source/<name>.csv` in the IW4x install
    pub fn zone_source(mut self, name: &str) -> Self {
        self.zone_sources.push(name.to_string());
        self
    }

    pub fn export_script(mut self, body: &str) -> Self {
        self.export_script = Some(body.to_string());
        self
    }

    pub fn build_script(mut self, body: &str) -> Self {
        self.build_script = Some(body.to_string());
        self
    }

    /// Appended verbatim to `mapport.toml`
    pub fn config(mut self, toml: &str) -> Self {
        self.extra_config.push_str(toml);
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            games: TempDir::new().expect("Failed to create games dir"),
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            mapport_bin: PathBuf::from(env!("CARGO_BIN_EXE_mapport")),
        };

        std::fs::create_dir_all(env.source_game()).unwrap();
        std::fs::create_dir_all(env.target_game()).unwrap();

        for name in &self.stock_maps {
            write_file(
                &env.source_game().join(format!("zone/english/{}.ff", name)),
                "",
            );
        }
        for name in &self.usermaps {
            write_file(
                &env.source_game().join(format!("usermaps/{}/{}.ff", name, name)),
                "",
            );
        }
        for name in &self.zone_sources {
            env.write_target_file(&format!("zone_source/{}.csv", name), "");
        }

        if let Some(body) = &self.export_script {
            write_script(&env.source_game().join("iw3xport.sh"), body);
        }
        if let Some(body) = &self.build_script {
            write_script(&env.target_game().join("iw4x.sh"), body);
        }

        if self.configure_paths {
            let config = format!(
                r#"[paths]
source_game = "{}"
target_game = "{}"

[tools]
export_executable = "iw3xport.sh"
build_executable = "iw4x.sh"
export_args = ["{{destination}}", "{{map}}"]
build_args = ["{{zone}}"]
run_args = ["{{map}}"]
{}"#,
                env.source_game().display(),
                env.target_game().display(),
                self.extra_config
            );
            write_file(&env.project_root.path().join("mapport.toml"), &config);
        }

        env
    }
}
