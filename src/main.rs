use std::process::ExitCode;

use transcript_search::cli;
use transcript_search::error::QueryError;

/// Exit status for malformed invocations, matching clap's own usage errors
const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let usage = e.downcast_ref::<QueryError>().is_some_and(QueryError::is_usage_error);
            if usage { ExitCode::from(USAGE_EXIT_CODE) } else { ExitCode::FAILURE }
        }
    }
}
