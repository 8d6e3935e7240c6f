//! `hamlog` - interactive terminal QSO logger.

use std::process::ExitCode;

use hamlog::command;
use hamlog::console::CrosstermConsole;
use hamlog::logging::init_logging;
use hamlog::lookup::WebLookup;
use hamlog::persist::json::JsonSink;
use hamlog::session::SessionState;

fn main() -> ExitCode {
    init_logging();

    let sink = JsonSink::default();
    let mut store = match sink.load() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("hamlog: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = SessionState::new();
    let mut console = CrosstermConsole::new();
    let lookup = WebLookup::default();

    match command::run(&mut session, &mut store, &sink, &mut console, &lookup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hamlog: terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
