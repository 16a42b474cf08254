use clap::Parser;
use projrun::cli::{CliArgs, Command};
use projrun::project::Operation;

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn setup_is_clone_then_install() {
    let args = parse(&["projrun", "setup"]);
    assert_eq!(
        args.command.operations(),
        vec![Operation::Clone, Operation::Install]
    );
}

#[test]
fn update_defaults_to_main() {
    let args = parse(&["projrun", "update"]);
    assert_eq!(
        args.command.operations(),
        vec![Operation::Update {
            branch: "main".to_string()
        }]
    );

    let args = parse(&["projrun", "update", "--branch", "dev"]);
    assert_eq!(
        args.command.operations(),
        vec![Operation::Update {
            branch: "dev".to_string()
        }]
    );
}

#[test]
fn exec_keeps_hyphenated_tokens() {
    let args = parse(&["projrun", "-p", "api", "exec", "git", "log", "--oneline", "-n", "3"]);

    assert_eq!(args.projects, vec!["api".to_string()]);
    assert_eq!(
        args.command.operations(),
        vec![Operation::Exec {
            command: vec![
                "git".to_string(),
                "log".to_string(),
                "--oneline".to_string(),
                "-n".to_string(),
                "3".to_string(),
            ]
        }]
    );
}

#[test]
fn exec_requires_a_command() {
    assert!(CliArgs::try_parse_from(["projrun", "exec"]).is_err());
}

#[test]
fn global_flags_after_subcommand() {
    let args = parse(&[
        "projrun",
        "install",
        "--dry-run",
        "--config",
        "conf/Projrun.toml",
        "--project",
        "a",
        "--project",
        "b",
    ]);

    assert!(args.dry_run);
    assert_eq!(args.config.as_deref(), Some("conf/Projrun.toml"));
    assert_eq!(args.projects, vec!["a".to_string(), "b".to_string()]);
    assert!(matches!(args.command, Command::Install));
}

#[test]
fn list_performs_no_operations() {
    let args = parse(&["projrun", "list"]);
    assert!(args.command.operations().is_empty());
}
