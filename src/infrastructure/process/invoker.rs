//! Process-backed tool invoker
//!
//! stdout and stderr are read on their own threads and merged into one
//! ordered stream, so a chatty stderr never stalls the child on a full
//! stdout pipe.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use crate::domain::ports::{ToolError, ToolInvocation, ToolInvoker};

/// Runs tools as child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessToolInvoker {
    /// Program and arguments placed before the tool (e.g. `wine`)
    launcher: Vec<String>,
}

impl ProcessToolInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every tool through `launcher`; an empty list runs tools directly
    pub fn with_launcher(mut self, launcher: Vec<String>) -> Self {
        self.launcher = launcher;
        self
    }

    fn command(&self, invocation: &ToolInvocation) -> (PathBuf, Command) {
        let (program, mut cmd) = match self.launcher.split_first() {
            Some((launcher, extra)) => {
                let mut cmd = Command::new(launcher);
                cmd.args(extra).arg(invocation.program());
                (PathBuf::from(launcher), cmd)
            }
            None => (
                invocation.program().to_path_buf(),
                Command::new(invocation.program()),
            ),
        };
        cmd.args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = invocation.working_dir() {
            cmd.current_dir(dir);
        }
        (program, cmd)
    }
}

/// Forward `reader` line by line until EOF
fn pump<R: Read + Send + 'static>(reader: R, tx: mpsc::Sender<String>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    let line = line.trim_end_matches(['\n', '\r']);
                    if tx.send(line.to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

impl ToolInvoker for ProcessToolInvoker {
    fn invoke(
        &self,
        invocation: &ToolInvocation,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<i32, ToolError> {
        let (program, mut cmd) = self.command(invocation);
        tracing::debug!(program = %program.display(), "spawning tool");

        let mut child = cmd
            .spawn()
            .map_err(|source| ToolError::Launch { program, source })?;

        let (tx, rx) = mpsc::channel();
        let mut readers = Vec::new();
        if let Some(stdout) = child.stdout.take() {
            readers.push(pump(stdout, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(pump(stderr, tx.clone()));
        }
        drop(tx);

        for line in rx {
            on_line(&line);
        }
        for reader in readers {
            let _ = reader.join();
        }

        let status = child.wait().map_err(|source| ToolError::Wait {
            program: invocation.program().to_path_buf(),
            source,
        })?;
        tracing::debug!(tool = %invocation.tool_name(), status = ?status.code(), "tool exited");

        status.code().ok_or_else(|| ToolError::Terminated {
            program: invocation.program().to_path_buf(),
        })
    }
}
