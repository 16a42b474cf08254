// src/config/mod.rs

//! Configuration loading and validation for projrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate project definitions and template overrides (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_with_fs};
pub use model::{ConfigFile, ProjectDefinition, RawConfigFile, SettingsSection};
