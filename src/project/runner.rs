// src/project/runner.rs

//! Per-project lifecycle runner.
//!
//! A [`ProjectRunner`] is built once from a [`ProjectDefinition`] plus the
//! [`AmbientDefaults`] of the run, and is immutable afterwards. Each lifecycle
//! operation renders one template, announces it, and awaits the executor:
//!
//! | operation | template  | working directory |
//! |-----------|-----------|-------------------|
//! | clone     | `clone`   | `<cwd>`           |
//! | install   | `install` | `<cwd>/<name>`    |
//! | update    | `update`  | `<cwd>/<name>`    |
//! | exec      | (tokens)  | `<cwd>/<name>`    |

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::loader::{config_root_dir, default_config_path};
use crate::config::model::{ProjectDefinition, SettingsSection};
use crate::errors::{ProjrunError, Result};
use crate::exec::{CommandExecutor, ExecOutput, ExecRequest, ShellExecutor};
use crate::fs::{FileSystem, RealFileSystem};
use crate::project::template::{render, CommandOverrides, CommandTemplates, Placeholder};
use crate::types::StreamMode;

/// Values applied when a project definition leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientDefaults {
    pub cwd: PathBuf,
    pub user: String,
    /// Template layer projects merge their own `commands` onto.
    pub commands: CommandTemplates,
    /// Config file the definitions came from; named in error messages and
    /// used to resolve relative directories.
    pub config_path: PathBuf,
}

impl AmbientDefaults {
    pub fn new(cwd: impl Into<PathBuf>, user: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            user: user.into(),
            commands: CommandTemplates::builtin(),
            config_path: default_config_path(),
        }
    }

    pub fn with_commands(mut self, overrides: &CommandOverrides) -> Self {
        self.commands = self.commands.merged(overrides);
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Resolve ambient values from the `[settings]` section.
    ///
    /// - `cwd`: `settings.cwd` (relative to the config file's directory),
    ///   else the process working directory.
    /// - `user`: `settings.user`, else `$USER`, else `$USERNAME`, else "".
    pub fn from_settings(settings: &SettingsSection, config_path: &Path) -> Result<Self> {
        let cwd = match non_empty(settings.cwd.as_deref()) {
            Some(dir) => resolve_dir(dir, config_path),
            None => std::env::current_dir()?,
        };

        let user = match non_empty(settings.user.as_deref()) {
            Some(user) => user.to_string(),
            None => user_from_env(),
        };

        Ok(Self::new(cwd, user).with_config_path(config_path))
    }
}

fn user_from_env() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            warn!("no user configured and neither $USER nor $USERNAME is set; <user> renders empty");
            String::new()
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve_dir(dir: &str, config_path: &Path) -> PathBuf {
    let dir = PathBuf::from(dir);
    if dir.is_absolute() {
        dir
    } else {
        config_root_dir(config_path).join(dir)
    }
}

/// One lifecycle step, as requested by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Clone,
    Install,
    Update { branch: String },
    Exec { command: Vec<String> },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Clone => "clone",
            Operation::Install => "install",
            Operation::Update { .. } => "update",
            Operation::Exec { .. } => "exec",
        }
    }
}

pub struct ProjectRunner {
    name: String,
    origin_url: String,
    cwd: PathBuf,
    user: String,
    branches: BTreeMap<String, String>,
    commands: CommandTemplates,
    config_path: PathBuf,
    streams: StreamMode,
    executor: Arc<dyn CommandExecutor>,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for ProjectRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectRunner")
            .field("name", &self.name)
            .field("origin_url", &self.origin_url)
            .field("cwd", &self.cwd)
            .field("user", &self.user)
            .field("branches", &self.branches)
            .field("commands", &self.commands)
            .field("streams", &self.streams)
            .finish_non_exhaustive()
    }
}

impl ProjectRunner {
    /// Build a runner that executes through the platform shell with
    /// inherited streams.
    ///
    /// The definition's own `cwd`/`user` win when non-empty; its `commands`
    /// are merged key by key onto `ambient.commands`. Whitespace-only
    /// `cwd`/`user` count as absent too, which is stricter than a plain
    /// empty-string check.
    pub fn new(definition: &ProjectDefinition, ambient: &AmbientDefaults) -> Self {
        let cwd = match non_empty(definition.cwd.as_deref()) {
            Some(dir) => resolve_dir(dir, &ambient.config_path),
            None => ambient.cwd.clone(),
        };
        let user = non_empty(definition.user.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| ambient.user.clone());

        let commands = if definition.commands.is_empty() {
            ambient.commands.clone()
        } else {
            ambient.commands.merged(&definition.commands)
        };

        Self {
            name: definition.name.clone(),
            origin_url: definition.origin_url.clone(),
            cwd,
            user,
            branches: definition.branches.clone(),
            commands,
            config_path: ambient.config_path.clone(),
            streams: StreamMode::default(),
            executor: Arc::new(ShellExecutor::new()),
            fs: Arc::new(RealFileSystem),
        }
    }

    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_streams(mut self, streams: StreamMode) -> Self {
        self.streams = streams;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin_url(&self) -> &str {
        &self.origin_url
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn branches(&self) -> &BTreeMap<String, String> {
        &self.branches
    }

    pub fn commands(&self) -> &CommandTemplates {
        &self.commands
    }

    /// Directory the project is checked out into: `<cwd>/<name>`.
    pub fn project_dir(&self) -> PathBuf {
        self.cwd.join(&self.name)
    }

    // ----- rendering (pure) -----

    pub fn render_clone(&self) -> String {
        render(
            &self.commands.clone,
            &[
                (Placeholder::Url, self.origin_url.as_str()),
                (Placeholder::User, self.user.as_str()),
            ],
        )
    }

    pub fn render_install(&self) -> String {
        self.commands.install.clone()
    }

    pub fn render_update(&self, branch: &str) -> Result<String> {
        let reference = self
            .branches
            .get(branch)
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| {
                ProjrunError::config(format!(
                    "branch `{}` not found in `{}` definition. Add this branch to the project's `branches` table in {}.",
                    branch,
                    self.name,
                    self.config_path.display()
                ))
            })?;

        Ok(render(&self.commands.update, &[(Placeholder::Branch, reference.as_str())]))
    }

    pub fn render_exec(&self, command: &[String]) -> Result<String> {
        if command.is_empty() {
            return Err(ProjrunError::config(format!(
                "exec for project `{}` requires a command",
                self.name
            )));
        }
        Ok(command.join(" "))
    }

    /// Render `operation` without running it, together with the directory
    /// it would run in.
    pub fn render(&self, operation: &Operation) -> Result<(String, PathBuf)> {
        match operation {
            Operation::Clone => Ok((self.render_clone(), self.cwd.clone())),
            Operation::Install => Ok((self.render_install(), self.project_dir())),
            Operation::Update { branch } => Ok((self.render_update(branch)?, self.project_dir())),
            Operation::Exec { command } => Ok((self.render_exec(command)?, self.project_dir())),
        }
    }

    // ----- announce -----

    /// Print the project name and the rendered command to stdout.
    pub fn announce(&self, command: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.announce_to(&mut out, command);
    }

    /// Same as [`announce`](Self::announce), into any writer. Write errors
    /// are ignored.
    pub fn announce_to<W: Write>(&self, out: &mut W, command: &str) {
        info!(project = %self.name, cmd = %command, "running command");
        let _ = write!(out, "\nProject: {}\n\n> {}\n\n", self.name, command);
        let _ = out.flush();
    }

    // ----- operations -----

    pub async fn clone(&self) -> Result<ExecOutput> {
        let command = self.render_clone();

        if !self.fs.is_dir(&self.cwd) {
            return Err(ProjrunError::config(format!(
                "working directory `{}` not found (project `{}`)",
                self.cwd.display(),
                self.name
            )));
        }

        self.announce(&command);
        self.execute(command, self.cwd.clone()).await
    }

    pub async fn install(&self) -> Result<ExecOutput> {
        let command = self.render_install();
        self.announce(&command);
        self.execute(command, self.project_dir()).await
    }

    pub async fn update(&self, branch: &str) -> Result<ExecOutput> {
        let command = self.render_update(branch)?;
        self.announce(&command);
        self.execute(command, self.project_dir()).await
    }

    pub async fn exec(&self, command: &[String]) -> Result<ExecOutput> {
        let command = self.render_exec(command)?;
        self.announce(&command);
        self.execute(command, self.project_dir()).await
    }

    /// Dispatch a single [`Operation`].
    pub async fn perform(&self, operation: &Operation) -> Result<ExecOutput> {
        debug!(project = %self.name, op = operation.name(), "performing operation");
        match operation {
            Operation::Clone => self.clone().await,
            Operation::Install => self.install().await,
            Operation::Update { branch } => self.update(branch).await,
            Operation::Exec { command } => self.exec(command).await,
        }
    }

    async fn execute(&self, command: String, cwd: PathBuf) -> Result<ExecOutput> {
        let request = ExecRequest {
            command,
            cwd,
            streams: self.streams,
        };
        self.executor.execute(request).await
    }
}
