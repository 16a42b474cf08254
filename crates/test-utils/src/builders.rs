#![allow(dead_code)]

use projrun::config::{ConfigFile, ProjectDefinition, RawConfigFile, SettingsSection};
use projrun::project::CommandOverrides;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                settings: SettingsSection::default(),
                commands: CommandOverrides::default(),
                project: Vec::new(),
            },
        }
    }

    pub fn with_project(mut self, project: ProjectDefinition) -> Self {
        self.config.project.push(project);
        self
    }

    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.config.settings.cwd = Some(cwd.to_string());
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.config.settings.user = Some(user.to_string());
        self
    }

    pub fn with_install(mut self, template: &str) -> Self {
        self.config.commands.install = Some(template.to_string());
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ProjectDefinition`.
pub struct ProjectBuilder {
    project: ProjectDefinition,
}

impl ProjectBuilder {
    pub fn new(name: &str, origin_url: &str) -> Self {
        Self {
            project: ProjectDefinition {
                name: name.to_string(),
                origin_url: origin_url.to_string(),
                ..ProjectDefinition::default()
            },
        }
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.project.cwd = Some(cwd.to_string());
        self
    }

    pub fn user(mut self, user: &str) -> Self {
        self.project.user = Some(user.to_string());
        self
    }

    pub fn branch(mut self, key: &str, reference: &str) -> Self {
        self.project
            .branches
            .insert(key.to_string(), reference.to_string());
        self
    }

    pub fn clone_cmd(mut self, template: &str) -> Self {
        self.project.commands.clone = Some(template.to_string());
        self
    }

    pub fn install_cmd(mut self, template: &str) -> Self {
        self.project.commands.install = Some(template.to_string());
        self
    }

    pub fn update_cmd(mut self, template: &str) -> Self {
        self.project.commands.update = Some(template.to_string());
        self
    }

    pub fn build(self) -> ProjectDefinition {
        self.project
    }
}
