// src/project/mod.rs

//! Project lifecycle: command templates and the per-project runner.
//!
//! - [`template`] holds the builtin templates, per-key overrides, and the
//!   placeholder substitution.
//! - [`runner`] resolves a definition against ambient defaults and runs the
//!   clone / install / update / exec operations.

pub mod runner;
pub mod template;

pub use crate::config::model::ProjectDefinition;
pub use runner::{AmbientDefaults, Operation, ProjectRunner};
pub use template::{CommandOverrides, CommandTemplates, Placeholder};
