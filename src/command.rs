//! Single-keypress command mapping and the blocking dispatch loop.

use std::io;

use tracing::{debug, warn};

use crate::console::Console;
use crate::core::store::LogStore;
use crate::lookup::CallsignLookup;
use crate::persist::json::JsonSink;
use crate::session::{SessionState, UtcStamp};
use crate::view;

/// One state transition, mapped from a single input symbol.
///
/// Every command is independent and repeatable in any order; there is no
/// multi-step wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stamp the contact start from the wall clock.
    MarkStart,
    /// Stamp the contact end from the wall clock.
    MarkEnd,
    /// Enter the callsign, backfilling name/qth from prior contacts.
    Callsign,
    /// Enter the operator name.
    Name,
    /// Enter the location.
    Location,
    /// Enter the mode (sticky).
    Mode,
    /// Enter the frequency (sticky).
    Frequency,
    /// Enter the band (sticky).
    Band,
    /// Enter the transmitted signal report.
    TxReport,
    /// Enter the received signal report.
    RxReport,
    /// Append the draft to the store and start a fresh one.
    Save,
    /// Discard the draft without touching the store.
    Reset,
    /// Render the whole database.
    PrintAll,
    /// Render the contact history for the draft's callsign.
    PrintHistory,
    /// Open a web lookup for the draft's callsign.
    Lookup,
    /// Save the database and end the session.
    Quit,
}

impl Command {
    /// Maps an input symbol to its command; unmapped symbols return `None`
    /// and are ignored by the loop.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            's' => Some(Self::MarkStart),
            'e' => Some(Self::MarkEnd),
            'c' => Some(Self::Callsign),
            'n' => Some(Self::Name),
            'h' => Some(Self::Location),
            'm' => Some(Self::Mode),
            'f' => Some(Self::Frequency),
            'b' => Some(Self::Band),
            't' => Some(Self::TxReport),
            'r' => Some(Self::RxReport),
            'v' => Some(Self::Save),
            'x' => Some(Self::Reset),
            'p' => Some(Self::PrintAll),
            'y' => Some(Self::PrintHistory),
            'l' => Some(Self::Lookup),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Outcome of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// The session is over.
    Quit,
}

/// Runs the session: render draft and menu, read one symbol, dispatch,
/// repeat until the quit transition succeeds.
///
/// Only console I/O errors abort the loop; store and persistence failures are
/// reported to the operator and the loop continues with the in-memory store
/// intact.
pub fn run<C, L>(
    session: &mut SessionState,
    store: &mut LogStore,
    sink: &JsonSink,
    console: &mut C,
    lookup: &L,
) -> io::Result<()>
where
    C: Console,
    L: CallsignLookup,
{
    loop {
        console.print(&view::render_draft(&session.draft))?;
        console.print(view::render_menu())?;

        let key = console.read_key()?;
        let Some(command) = Command::from_key(key) else {
            continue;
        };
        match dispatch(command, session, store, sink, console, lookup)? {
            Flow::Continue => {}
            Flow::Quit => return Ok(()),
        }
    }
}

/// Applies one command against the session and store.
pub fn dispatch<C, L>(
    command: Command,
    session: &mut SessionState,
    store: &mut LogStore,
    sink: &JsonSink,
    console: &mut C,
    lookup: &L,
) -> io::Result<Flow>
where
    C: Console,
    L: CallsignLookup,
{
    match command {
        Command::MarkStart => session.mark_start(UtcStamp::now()),
        Command::MarkEnd => session.mark_end(UtcStamp::now()),
        Command::Callsign => {
            let input = console.prompt("Callsign")?;
            let normalized = input.to_uppercase();
            let prior = store.last_for(&normalized);
            session.set_callsign(&input, prior);
        }
        Command::Name => {
            let label = if session.draft.name.is_empty() {
                "Name".to_string()
            } else {
                format!("Name [{}]", session.draft.name)
            };
            let input = console.prompt(&label)?;
            session.set_name(&input);
        }
        Command::Location => {
            let input = console.prompt("QTH")?;
            session.set_qth(&input);
        }
        Command::Mode => {
            let input = console.prompt("Mode")?;
            session.set_mode(&input);
        }
        Command::Frequency => {
            let input = console.prompt("Frequency")?;
            session.set_frequency(&input);
        }
        Command::Band => {
            let input = console.prompt("Band")?;
            session.set_band(&input);
        }
        Command::TxReport => {
            let input = console.prompt("TX (RST)")?;
            session.set_tx_report(&input);
        }
        Command::RxReport => {
            let input = console.prompt("RX (RST)")?;
            session.set_rx_report(&input);
        }
        Command::Save => {
            if store.append(&session.draft.callsign, session.draft.to_entry()) {
                debug!(callsign = %session.draft.callsign, "contact appended");
                if let Err(err) = sink.save_recovery(store) {
                    warn!(%err, "recovery write failed");
                    console.print(&format!("{err}\n"))?;
                }
                session.reset_draft();
            }
        }
        Command::Reset => session.reset_draft(),
        Command::PrintAll => console.print(&view::render_database(store))?,
        Command::PrintHistory => {
            if !session.draft.callsign.is_empty() {
                let rows = store.history(&session.draft.callsign);
                console.print(&view::render_history(
                    &session.draft.callsign,
                    rows.as_deref(),
                ))?;
            }
        }
        Command::Lookup => lookup.lookup(&session.draft.callsign),
        Command::Quit => match sink.save(store) {
            Ok(()) => return Ok(Flow::Quit),
            Err(err) => {
                warn!(%err, "final save failed");
                console.print(&format!(
                    "{err}\nThe log is still in memory; press q to retry.\n"
                ))?;
            }
        },
    }
    Ok(Flow::Continue)
}
