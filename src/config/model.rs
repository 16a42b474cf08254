// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::project::template::CommandOverrides;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [settings]
/// cwd = "/home/alice/work"
/// user = "alice"
///
/// [commands]
/// install = "pnpm install"
///
/// [[project]]
/// name = "api"
/// origin_url = "git@github.com:acme/api.git"
/// branches = { main = "release-1.0" }
/// commands = { update = "git fetch && git checkout <branch>" }
/// ```
///
/// Only `[[project]]` is required. Use [`ConfigFile`] (via `TryFrom`) for
/// anything beyond deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Ambient defaults from `[settings]`.
    #[serde(default)]
    pub settings: SettingsSection,

    /// Config-wide template overrides from `[commands]`.
    #[serde(default)]
    pub commands: CommandOverrides,

    /// All `[[project]]` entries, in file order.
    #[serde(default)]
    pub project: Vec<ProjectDefinition>,
}

/// Validated configuration.
///
/// Only constructible through `ConfigFile::try_from(RawConfigFile)`, so
/// holders can rely on the checks in `validate.rs`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub settings: SettingsSection,
    pub commands: CommandOverrides,
    pub projects: Vec<ProjectDefinition>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        settings: SettingsSection,
        commands: CommandOverrides,
        projects: Vec<ProjectDefinition>,
    ) -> Self {
        Self {
            settings,
            commands,
            projects,
        }
    }

    pub fn project(&self, name: &str) -> Option<&ProjectDefinition> {
        self.projects.iter().find(|p| p.name == name)
    }
}

/// `[settings]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsSection {
    /// Directory projects are cloned into when they don't set `cwd`.
    #[serde(default)]
    pub cwd: Option<String>,

    /// Value for `<user>` when a project doesn't set `user`.
    #[serde(default)]
    pub user: Option<String>,
}

/// One `[[project]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectDefinition {
    /// Project name; also the directory name under `cwd`.
    pub name: String,

    /// Substituted for `<url>` in the clone template.
    pub origin_url: String,

    #[serde(default)]
    pub cwd: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    /// Logical branch key (e.g. `main`) to the ref passed as `<branch>`.
    #[serde(default)]
    pub branches: BTreeMap<String, String>,

    #[serde(default)]
    pub commands: CommandOverrides,
}
