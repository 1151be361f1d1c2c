//! Launch Use Case
//!
//! Starts the target game on one built map so it can be tried out. The run
//! lasts until the game exits; a missing bundle aborts before anything is
//! started.

use crate::application::run::{drive, preflight, run_tool};
use crate::domain::entities::{AssetItem, RunReport};
use crate::domain::ports::{FileSystem, PathProvider, PipelineEventSink, ToolInvocation, ToolInvoker};
use crate::domain::services::{expand_arguments, ArgumentVars};
use crate::domain::value_objects::Operation;
use crate::error::{MapportResult, PipelineFailure};

pub struct LaunchUseCase<FS, TI, PP>
where
    FS: FileSystem,
    TI: ToolInvoker,
    PP: PathProvider,
{
    file_system: FS,
    invoker: TI,
    paths: PP,
}

impl<FS, TI, PP> LaunchUseCase<FS, TI, PP>
where
    FS: FileSystem,
    TI: ToolInvoker,
    PP: PathProvider,
{
    pub fn new(file_system: FS, invoker: TI, paths: PP) -> Self {
        Self {
            file_system,
            invoker,
            paths,
        }
    }

    pub fn execute(&self, item: AssetItem, sink: &dyn PipelineEventSink) -> MapportResult<RunReport> {
        let items = vec![item];
        preflight(&self.paths, &items)?;
        Ok(drive(Operation::Run, items, sink, |item, sink| {
            self.launch_item(item, sink)
        }))
    }

    /// Game call for one map
    pub fn invocation(&self, item: &AssetItem) -> ToolInvocation {
        let vars = ArgumentVars::new()
            .set("map", item.name())
            .set("zone", item.name());
        ToolInvocation::new(self.paths.build_tool())
            .with_args(expand_arguments(self.paths.run_arguments(), &vars))
            .with_working_dir(self.paths.target_game_dir())
    }

    fn launch_item(&self, item: &AssetItem, sink: &dyn PipelineEventSink) -> Result<(), PipelineFailure> {
        let bundle = self.paths.map_bundle_path(item.name());
        if !self.file_system.exists(&bundle) {
            return Err(PipelineFailure::PrerequisiteMissing { path: bundle });
        }
        run_tool(&self.invoker, &self.invocation(item), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{write_file, FakePaths, ScriptedInvoker};
    use crate::domain::ports::RecordingEventSink;
    use crate::domain::value_objects::MapCategory;
    use crate::error::MapportError;
    use crate::infrastructure::fs::LocalFs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn zone(paths: &FakePaths, name: &str) -> AssetItem {
        AssetItem::new(name, MapCategory::ZoneSource, paths.data_dir(name))
    }

    #[test]
    fn launches_game_on_built_map() {
        let dir = tempdir().unwrap();
        let paths = FakePaths::new(dir.path());
        write_file(paths.target_game_dir(), "usermaps/mp_a/mp_a.ff", "");
        let target = paths.target_game_dir().to_path_buf();
        let tool = paths.build_tool();
        let item = zone(&paths, "mp_a");
        let invoker = Arc::new(ScriptedInvoker::new().prints(&["loading mp_a"]));
        let sink = RecordingEventSink::default();

        let report = LaunchUseCase::new(LocalFs::new(), invoker.clone(), paths)
            .execute(item, &sink)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.operation, Operation::Run);
        let calls = invoker.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program(), tool.as_path());
        assert_eq!(calls[0].args().to_vec(), vec!["mp_a", "+devmap"]);
        assert_eq!(calls[0].working_dir(), Some(target.as_path()));
        assert!(sink.lines().contains(&"loading mp_a".to_string()));
    }

    #[test]
    fn unbuilt_map_is_not_launched() {
        let dir = tempdir().unwrap();
        let paths = FakePaths::new(dir.path());
        let bundle = paths.map_bundle_path("mp_a");
        let item = zone(&paths, "mp_a");
        let invoker = Arc::new(ScriptedInvoker::new());

        let report = LaunchUseCase::new(LocalFs::new(), invoker.clone(), paths)
            .execute(item, &RecordingEventSink::default())
            .unwrap();

        assert!(invoker.calls().is_empty());
        assert_eq!(
            report.failure(),
            Some(&PipelineFailure::PrerequisiteMissing { path: bundle })
        );
    }

    #[test]
    fn game_crash_is_reported() {
        let dir = tempdir().unwrap();
        let paths = FakePaths::new(dir.path());
        write_file(paths.target_game_dir(), "usermaps/mp_a/mp_a.ff", "");
        let item = zone(&paths, "mp_a");
        let invoker = Arc::new(ScriptedInvoker::new().exits_with(1));

        let report = LaunchUseCase::new(LocalFs::new(), invoker, paths)
            .execute(item, &RecordingEventSink::default())
            .unwrap();

        assert!(matches!(
            report.failure(),
            Some(PipelineFailure::ToolExecution { code: 1, .. })
        ));
    }

    #[test]
    fn invalid_paths_refuse_to_start() {
        let paths = FakePaths::invalid();
        let item = zone(&paths, "mp_a");

        let err = LaunchUseCase::new(LocalFs::new(), Arc::new(ScriptedInvoker::new()), paths)
            .execute(item, &RecordingEventSink::default())
            .unwrap_err();

        assert!(matches!(err, MapportError::PathsNotConfigured { .. }));
    }
}
