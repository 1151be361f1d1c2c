//! ToolInvoker port - running the external converter and build tools
//!
//! The core only needs two things from a tool run: every output line as it
//! appears, and the exit code. A tool that cannot be started is reported as
//! [`ToolError::Launch`], never as a made-up exit code.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// One external tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Executable file name, for status messages
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

/// Tool run errors (anything other than a normal exit)
#[derive(Debug, Error)]
pub enum ToolError {
    /// The process could not be started
    #[error("failed to launch {}: {source}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ended without an exit code (killed by a signal)
    #[error("{} was terminated without an exit status", program.display())]
    Terminated { program: PathBuf },

    /// Waiting on the process failed
    #[error("lost track of {}: {source}", program.display())]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runs external tools, streaming their output line by line
pub trait ToolInvoker: Send + Sync {
    /// Run `invocation` to completion.
    ///
    /// `on_line` receives stdout and stderr lines in the order they are read.
    /// Returns the exit code on normal termination.
    fn invoke(&self, invocation: &ToolInvocation, on_line: &mut dyn FnMut(&str)) -> Result<i32, ToolError>;
}

impl<T: ToolInvoker + ?Sized> ToolInvoker for std::sync::Arc<T> {
    fn invoke(&self, invocation: &ToolInvocation, on_line: &mut dyn FnMut(&str)) -> Result<i32, ToolError> {
        (**self).invoke(invocation, on_line)
    }
}
