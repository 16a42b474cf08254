#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use projrun::exec::CommandExecutor;
use projrun::fs::mock::MockFileSystem;
use projrun::project::{AmbientDefaults, ProjectDefinition, ProjectRunner};
use projrun_test_utils::fake_executor::RecordingExecutor;

pub use projrun_test_utils::{init_tracing, with_timeout};

pub const CWD: &str = "/work";
pub const USER: &str = "alice";

/// Ambient defaults rooted at [`CWD`] with user [`USER`].
pub fn ambient() -> AmbientDefaults {
    AmbientDefaults::new(CWD, USER).with_config_path("/work/Projrun.toml")
}

/// Mock filesystem where `dir` exists.
pub fn fs_with_dir(dir: impl AsRef<Path>) -> Arc<MockFileSystem> {
    let fs = MockFileSystem::new();
    fs.add_dir(dir);
    Arc::new(fs)
}

/// Runner wired to a recording executor and a mock filesystem.
pub fn runner_with(
    definition: &ProjectDefinition,
    executor: &Arc<RecordingExecutor>,
    fs: Arc<MockFileSystem>,
) -> ProjectRunner {
    let executor: Arc<dyn CommandExecutor> = executor.clone();
    ProjectRunner::new(definition, &ambient())
        .with_executor(executor)
        .with_fs(fs)
}
