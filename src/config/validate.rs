// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ProjrunError, Result};
use crate::project::template::CommandOverrides;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::ProjrunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.settings, raw.commands, raw.project))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_projects(cfg)?;
    validate_overrides("[commands]", &cfg.commands)?;
    validate_projects(cfg)?;
    Ok(())
}

fn ensure_has_projects(cfg: &RawConfigFile) -> Result<()> {
    if cfg.project.is_empty() {
        return Err(ProjrunError::ConfigError(
            "config must contain at least one [[project]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_projects(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();

    for (idx, project) in cfg.project.iter().enumerate() {
        let name = project.name.trim();
        if name.is_empty() {
            return Err(ProjrunError::ConfigError(format!(
                "project #{} has an empty `name`",
                idx + 1
            )));
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(ProjrunError::ConfigError(format!(
                "project name '{}' must be a single directory name",
                project.name
            )));
        }
        if !seen.insert(name) {
            return Err(ProjrunError::ConfigError(format!(
                "project '{}' is defined more than once",
                project.name
            )));
        }
        if project.origin_url.trim().is_empty() {
            return Err(ProjrunError::ConfigError(format!(
                "project '{}' has an empty `origin_url`",
                project.name
            )));
        }
        validate_overrides(&format!("project '{}' commands", project.name), &project.commands)?;
    }
    Ok(())
}

fn validate_overrides(location: &str, overrides: &CommandOverrides) -> Result<()> {
    for (key, template) in overrides.entries() {
        if template.trim().is_empty() {
            return Err(ProjrunError::ConfigError(format!(
                "{location}: `{key}` template must not be empty"
            )));
        }
    }
    Ok(())
}
