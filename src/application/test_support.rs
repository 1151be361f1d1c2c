//! Shared fakes for use case tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{
    ArchiveEntry, ArchiveWriter, FsResult, PathProvider, ToolError, ToolInvocation, ToolInvoker,
};

/// Game layout rooted in a temp directory
pub(crate) struct FakePaths {
    source: PathBuf,
    target: PathBuf,
    export_args: Vec<String>,
    build_args: Vec<String>,
    run_args: Vec<String>,
    valid: bool,
}

impl FakePaths {
    pub(crate) fn new(root: &Path) -> Self {
        let source = root.join("cod4");
        let target = root.join("iw4x");
        std::fs::create_dir_all(&source).unwrap();
        std::fs::create_dir_all(&target).unwrap();
        Self {
            source,
            target,
            export_args: vec!["{map}".to_string(), "{destination}".to_string()],
            build_args: vec!["{zone}".to_string(), "{teams}".to_string()],
            run_args: vec!["{map}".to_string(), "+devmap".to_string()],
            valid: true,
        }
    }

    pub(crate) fn invalid() -> Self {
        Self {
            source: PathBuf::from("/nonexistent/cod4"),
            target: PathBuf::from("/nonexistent/iw4x"),
            export_args: Vec::new(),
            build_args: Vec::new(),
            run_args: Vec::new(),
            valid: false,
        }
    }
}

impl PathProvider for FakePaths {
    fn source_game_dir(&self) -> &Path {
        &self.source
    }
    fn target_game_dir(&self) -> &Path {
        &self.target
    }
    fn export_tool(&self) -> PathBuf {
        self.source.join("iw3xport.exe")
    }
    fn build_tool(&self) -> PathBuf {
        self.target.join("iw4x.exe")
    }
    fn export_arguments(&self) -> &[String] {
        &self.export_args
    }
    fn build_arguments(&self) -> &[String] {
        &self.build_args
    }
    fn run_arguments(&self) -> &[String] {
        &self.run_args
    }
    fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Tool invoker that replays canned output and records every call
#[derive(Default)]
pub(crate) struct ScriptedInvoker {
    lines: Vec<String>,
    code: i32,
    fail_launch: bool,
    failing_arg: Option<(String, i32)>,
    calls: Mutex<Vec<ToolInvocation>>,
}

impl ScriptedInvoker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn prints(mut self, lines: &[&str]) -> Self {
        self.lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub(crate) fn exits_with(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    pub(crate) fn fails_to_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    /// Exit with `code` whenever an argument equals `arg`
    pub(crate) fn fails_for(mut self, arg: &str, code: i32) -> Self {
        self.failing_arg = Some((arg.to_string(), code));
        self
    }

    pub(crate) fn calls(&self) -> Vec<ToolInvocation> {
        self.calls.lock().unwrap().clone()
    }

    /// First argument of every call, usually the map or zone name
    pub(crate) fn called_for(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.args().first().cloned())
            .collect()
    }
}

impl ToolInvoker for ScriptedInvoker {
    fn invoke(
        &self,
        invocation: &ToolInvocation,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<i32, ToolError> {
        self.calls.lock().unwrap().push(invocation.clone());
        if self.fail_launch {
            return Err(ToolError::Launch {
                program: invocation.program().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        for line in &self.lines {
            on_line(line);
        }
        if let Some((arg, code)) = &self.failing_arg {
            if invocation.args().iter().any(|a| a == arg) {
                return Ok(*code);
            }
        }
        Ok(self.code)
    }
}

/// Archive writer that remembers what it was asked to pack
#[derive(Default)]
pub(crate) struct RecordingArchiver {
    written: Mutex<Vec<(PathBuf, Vec<ArchiveEntry>)>>,
}

impl RecordingArchiver {
    pub(crate) fn written(&self) -> Vec<(PathBuf, Vec<ArchiveEntry>)> {
        self.written.lock().unwrap().clone()
    }
}

impl ArchiveWriter for RecordingArchiver {
    fn write_archive(&self, destination: &Path, entries: &[ArchiveEntry]) -> FsResult<()> {
        self.written
            .lock()
            .unwrap()
            .push((destination.to_path_buf(), entries.to_vec()));
        Ok(())
    }
}

/// Write `content` at `root/rel`, creating parents
pub(crate) fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = rel
        .split('/')
        .fold(root.to_path_buf(), |acc, part| acc.join(part));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}
