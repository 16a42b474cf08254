// src/main.rs

use projrun::errors::ProjrunError;
use projrun::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("projrun error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        eprintln!("projrun error: {err}");
        std::process::exit(exit_status(&err));
    }
}

/// Mirror a failed subprocess's exit code; everything else exits with 1.
fn exit_status(err: &ProjrunError) -> i32 {
    err.exit_code().filter(|code| *code != 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use projrun::errors::SubprocessFailure;

    fn exited(code: Option<i32>) -> ProjrunError {
        ProjrunError::Subprocess {
            command: "false".to_string(),
            failure: SubprocessFailure::Exit { code },
        }
    }

    #[test]
    fn exit_status_mirrors_subprocess_code() {
        assert_eq!(exit_status(&exited(Some(3))), 3);
        assert_eq!(exit_status(&exited(None)), 1);
        assert_eq!(exit_status(&ProjrunError::config("bad")), 1);
    }
}
