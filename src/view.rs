//! Text rendering of the draft, menu, database dump, and history.
//!
//! Pure functions over the session and store; the console collaborator writes
//! the returned strings verbatim.

use std::fmt::Write;

use crate::core::store::{HistoryRow, LogStore};
use crate::qso::{QsoDraft, QsoEntry};

const RULE: &str = "===========================================================";
const THIN_RULE: &str = "-----------------------------------------------------------";

/// Renders the full current draft, shown before every menu.
pub fn render_draft(draft: &QsoDraft) -> String {
    format!(
        "\n{RULE}\n\n\
         Callsign: {}\n\
         Name: {}\n\
         QTH: {}\n\
         Start Time: {}\n\
         Start Date: {}\n\
         End Time: {}\n\
         End Date: {}\n\n\
         Mode: {}\n\
         Frequency: {}\n\
         Band: {}\n\
         TX (RST): {}\n\
         RX (RST): {}\n\n\
         {RULE}\n",
        draft.callsign,
        draft.name,
        draft.qth,
        draft.start_time,
        draft.start_date,
        draft.end_time,
        draft.end_date,
        draft.mode,
        draft.frequency,
        draft.band,
        draft.tx_report,
        draft.rx_report,
    )
}

/// Renders the command menu.
pub fn render_menu() -> &'static str {
    concat!(
        "-----------------------------------------------------------\n",
        "(c)allsign, (n)ame, qt(h), (s)tart time, (e)nd time        \n",
        "(m)ode, (f)req, (b)and, (t)x rst, (r)x rst                 \n",
        "sa(v)e, (x) discard, (p)rint log, histor(y), (l)ookup, (q)uit\n",
        "-----------------------------------------------------------\n\n",
    )
}

/// Renders every stored callsign and its entries, in store key order.
pub fn render_database(store: &LogStore) -> String {
    let mut out = String::new();
    for (callsign, entries) in store.iter() {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{callsign}");
        let _ = writeln!(out, "{THIN_RULE}");
        for entry in entries {
            out.push_str(&render_stored_entry(entry));
        }
        let _ = writeln!(out, "{RULE}\n");
    }
    out
}

/// Renders the history projection for `callsign`, or an explicit notice when
/// the callsign has no stored contacts.
pub fn render_history(callsign: &str, rows: Option<&[HistoryRow]>) -> String {
    let Some(rows) = rows else {
        return format!("\nNo contacts logged for {callsign}.\n\n");
    };
    let mut out = format!("\n{callsign}: {} contact(s)\n{THIN_RULE}\n", rows.len());
    for row in rows {
        let _ = writeln!(
            out,
            "{} {}  {}  {}",
            row.end_date, row.end_time, row.mode, row.band
        );
    }
    out.push('\n');
    out
}

fn render_stored_entry(entry: &QsoEntry) -> String {
    format!(
        "\nName: {}\n\
         QTH: {}\n\
         Start Time: {}\n\
         Start Date: {}\n\
         End Time: {}\n\
         End Date: {}\n\n\
         Mode: {}\n\
         Frequency: {}\n\
         Band: {}\n\
         TX (RST): {}\n\
         RX (RST): {}\n\n",
        entry.name,
        entry.qth,
        entry.start_time,
        entry.start_date,
        entry.end_time,
        entry.end_date,
        entry.mode,
        entry.frequency,
        entry.band,
        entry.tx_report,
        entry.rx_report,
    )
}
