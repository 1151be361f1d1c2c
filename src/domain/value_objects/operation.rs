//! Operation value object - which pipeline a run belongs to

use serde::Serialize;

/// A user-initiated pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Extract maps with the converter and generate their zone sources
    Export,
    /// Build zones with the target engine's build tool
    Build,
    /// Rewrite zone sources from already extracted data
    Regenerate,
    /// Pack images and sounds into an IWD archive
    Package,
    /// Start the target game on a built map
    Run,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Export => "export",
            Operation::Build => "build",
            Operation::Regenerate => "regenerate",
            Operation::Package => "package",
            Operation::Run => "run",
        }
    }

    /// Line appended to the status log when every item succeeded
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Export => "Export successful!",
            Operation::Build => "Build successful! You should now be able to run the map!",
            Operation::Regenerate => "Done regenerating sources!",
            Operation::Package => "Done generating IWD files!",
            Operation::Run => "Game exited.",
        }
    }

    /// Line appended to the status log when the queue was interrupted
    pub fn abort_message(&self) -> &'static str {
        match self {
            Operation::Export => {
                "An error occurred while exporting the map (check the log). Exporting was interrupted."
            }
            Operation::Build => {
                "An error occurred while building the map (check the log). Building was interrupted."
            }
            Operation::Regenerate => {
                "An error occurred while regenerating sources (check the log). Regeneration was interrupted."
            }
            Operation::Package => {
                "An error occurred while generating IWD files (check the log). Packaging was interrupted."
            }
            Operation::Run => "An error occurred while running the map (check the log).",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
