use std::path::{Path, PathBuf};

use projrun::config::SettingsSection;
use projrun::project::{AmbientDefaults, ProjectRunner};
use projrun_test_utils::builders::ProjectBuilder;

#[test]
fn definition_values_win_over_ambient() {
    let ambient = AmbientDefaults::new("/work", "alice");
    let def = ProjectBuilder::new("api", "u").cwd("/opt").user("bob").build();

    let runner = ProjectRunner::new(&def, &ambient);

    assert_eq!(runner.cwd(), Path::new("/opt"));
    assert_eq!(runner.user(), "bob");
    assert_eq!(runner.project_dir(), PathBuf::from("/opt/api"));
}

#[test]
fn empty_definition_values_fall_back_to_ambient() {
    let ambient = AmbientDefaults::new("/work", "alice");
    let def = ProjectBuilder::new("api", "u").cwd("").user("  ").build();

    let runner = ProjectRunner::new(&def, &ambient);

    assert_eq!(runner.cwd(), Path::new("/work"));
    assert_eq!(runner.user(), "alice");
}

#[test]
fn relative_project_cwd_resolves_against_config_dir() {
    let ambient =
        AmbientDefaults::new("/work", "alice").with_config_path("/etc/projrun/Projrun.toml");
    let def = ProjectBuilder::new("api", "u").cwd("repos").build();

    let runner = ProjectRunner::new(&def, &ambient);

    assert_eq!(runner.cwd(), Path::new("/etc/projrun/repos"));
}

#[test]
fn settings_supply_ambient_values() {
    let settings = SettingsSection {
        cwd: Some("checkouts".to_string()),
        user: Some("carol".to_string()),
    };

    let ambient =
        AmbientDefaults::from_settings(&settings, Path::new("/etc/projrun/Projrun.toml")).unwrap();

    assert_eq!(ambient.cwd, PathBuf::from("/etc/projrun/checkouts"));
    assert_eq!(ambient.user, "carol");
    assert_eq!(ambient.config_path, PathBuf::from("/etc/projrun/Projrun.toml"));
}

#[test]
fn absolute_settings_cwd_is_kept() {
    let settings = SettingsSection {
        cwd: Some("/srv".to_string()),
        user: Some("carol".to_string()),
    };

    let ambient = AmbientDefaults::from_settings(&settings, Path::new("Projrun.toml")).unwrap();
    assert_eq!(ambient.cwd, PathBuf::from("/srv"));
}

#[test]
fn missing_settings_cwd_uses_process_directory() {
    let settings = SettingsSection {
        cwd: None,
        user: Some("carol".to_string()),
    };

    let ambient = AmbientDefaults::from_settings(&settings, Path::new("Projrun.toml")).unwrap();
    assert_eq!(ambient.cwd, std::env::current_dir().unwrap());
}
