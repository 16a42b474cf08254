// src/project/template.rs

//! Command templates and placeholder rendering.
//!
//! A template is a plain shell command with `<url>`, `<user>` and `<branch>`
//! tokens. Tokens match case-insensitively and every occurrence is replaced.
//! Substitution is a single textual pass per token: substituted values are
//! never re-scanned for the same token and are inserted literally.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Deserialize;

pub const DEFAULT_CLONE: &str = "git clone <url>";
pub const DEFAULT_INSTALL: &str = "npm install";
pub const DEFAULT_UPDATE: &str = "git pull origin <branch>";

/// A placeholder token understood by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Url,
    User,
    Branch,
}

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Placeholder::Url.compile());
static USER_RE: LazyLock<Regex> = LazyLock::new(|| Placeholder::User.compile());
static BRANCH_RE: LazyLock<Regex> = LazyLock::new(|| Placeholder::Branch.compile());

impl Placeholder {
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Url => "<url>",
            Placeholder::User => "<user>",
            Placeholder::Branch => "<branch>",
        }
    }

    fn compile(self) -> Regex {
        Regex::new(&format!("(?i){}", regex::escape(self.token())))
            .expect("placeholder regex is valid")
    }

    fn regex(self) -> &'static Regex {
        match self {
            Placeholder::Url => &URL_RE,
            Placeholder::User => &USER_RE,
            Placeholder::Branch => &BRANCH_RE,
        }
    }
}

/// Replace every occurrence of `placeholder` in `template` with `value`.
pub fn substitute(template: &str, placeholder: Placeholder, value: &str) -> String {
    placeholder
        .regex()
        .replace_all(template, NoExpand(value))
        .into_owned()
}

/// Apply several substitutions in order.
///
/// Order matters: a value inserted by an earlier pair is visible to later
/// ones (e.g. an origin URL carrying `<user>`).
pub fn render(template: &str, values: &[(Placeholder, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (placeholder, value)| {
            substitute(&acc, *placeholder, value)
        })
}

/// Partial template set, as written in `[commands]` or a project's
/// `commands` table. Absent keys fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandOverrides {
    #[serde(default)]
    pub clone: Option<String>,
    #[serde(default)]
    pub install: Option<String>,
    #[serde(default)]
    pub update: Option<String>,
}

impl CommandOverrides {
    pub fn is_empty(&self) -> bool {
        self.clone.is_none() && self.install.is_none() && self.update.is_none()
    }

    /// Present entries as `(key, template)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("clone", self.clone.as_deref()),
            ("install", self.install.as_deref()),
            ("update", self.update.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// Complete template set: every lifecycle stage has a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplates {
    pub clone: String,
    pub install: String,
    pub update: String,
}

impl CommandTemplates {
    /// The process-wide defaults.
    pub fn builtin() -> Self {
        Self {
            clone: DEFAULT_CLONE.to_string(),
            install: DEFAULT_INSTALL.to_string(),
            update: DEFAULT_UPDATE.to_string(),
        }
    }

    /// Per-key merge: each key present in `overrides` replaces ours.
    pub fn merged(&self, overrides: &CommandOverrides) -> Self {
        Self {
            clone: overrides.clone.clone().unwrap_or_else(|| self.clone.clone()),
            install: overrides
                .install
                .clone()
                .unwrap_or_else(|| self.install.clone()),
            update: overrides
                .update
                .clone()
                .unwrap_or_else(|| self.update.clone()),
        }
    }
}

impl Default for CommandTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}
