//! Interactive per-callsign QSO logging: single-keypress draft assembly,
//! sticky defaults, JSON persistence with a shadow recovery copy, and
//! per-callsign contact history.
//!
//! # Examples
//!
//! Field entry with sticky defaults:
//! ```
//! use hamlog::session::SessionState;
//!
//! let mut session = SessionState::new();
//! session.set_callsign("w1aw", None);
//! session.set_mode("ssb");
//! session.set_frequency("14.200");
//! assert_eq!(session.draft.callsign, "W1AW");
//!
//! session.reset_draft();
//! assert_eq!(session.draft.mode, "SSB");
//! assert_eq!(session.draft.frequency, "14.200");
//! assert!(session.draft.callsign.is_empty());
//! ```
//!
//! Store append and history:
//! ```
//! use hamlog::core::store::LogStore;
//! use hamlog::qso::QsoEntry;
//!
//! let mut store = LogStore::new();
//! let entry = QsoEntry {
//!     mode: "CW".to_string(),
//!     band: "40m".to_string(),
//!     ..QsoEntry::default()
//! };
//! assert!(store.append("K1ABC", entry));
//! assert!(!store.append("", QsoEntry::default()));
//!
//! let rows = store.history("K1ABC").expect("one contact");
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].mode, "CW");
//! assert!(store.history("N0CALL").is_none());
//! ```
#![deny(missing_docs)]

/// Single-keypress command mapping and dispatch loop.
pub mod command;
/// Terminal collaborator trait and crossterm implementation.
pub mod console;
/// In-memory authoritative log store.
pub mod core;
/// Logging initialization.
pub mod logging;
/// External callsign lookup collaborator.
pub mod lookup;
/// JSON persistence for the log store.
pub mod persist;
/// QSO record model and sticky defaults.
pub mod qso;
/// Session state and field-entry transitions.
pub mod session;
/// Text rendering of draft, menu, database dump, and history.
pub mod view;
