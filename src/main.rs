//! Binary entrypoint for the `todo-history` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env before logging so it can switch on TODO_HISTORY_DEBUG.
    let dotenv = todo_history::config::load_dotenv();
    todo_history::logging::init();
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    match todo_history::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
