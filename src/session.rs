//! Session state: the draft being assembled plus sticky defaults.

use chrono::Utc;

use crate::qso::{QsoDraft, QsoEntry, StickyDefaults};

/// Wall-clock capture for the mark-start and mark-end commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtcStamp {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Time of day truncated to whole seconds, `HH:MM:SS`.
    pub time: String,
}

impl UtcStamp {
    /// Captures the current UTC wall-clock time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
        }
    }
}

/// Draft record and sticky defaults threaded through the dispatcher.
///
/// Every transition is an independent method usable in any order, any number
/// of times; the only coupling between draft and defaults is that mode,
/// frequency, and band assignments mirror into the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// The record currently being assembled.
    pub draft: QsoDraft,
    /// Mode/frequency/band values carried into the next draft.
    pub defaults: StickyDefaults,
}

impl SessionState {
    /// Fresh session: empty defaults, draft seeded from them.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the draft and seeds a new one from the sticky defaults.
    pub fn reset_draft(&mut self) {
        self.draft = QsoDraft::from_defaults(&self.defaults);
    }

    /// Sets the callsign (uppercased) and backfills name/qth from the most
    /// recent prior contact, touching only fields still empty so operator
    /// input is never overwritten.
    pub fn set_callsign(&mut self, input: &str, prior: Option<&QsoEntry>) {
        self.draft.callsign = input.to_uppercase();
        if let Some(prior) = prior {
            if self.draft.name.is_empty() {
                self.draft.name = prior.name.clone();
            }
            if self.draft.qth.is_empty() {
                self.draft.qth = prior.qth.clone();
            }
        }
    }

    /// Replaces the name; empty input keeps the prior value.
    pub fn set_name(&mut self, input: &str) {
        if !input.is_empty() {
            self.draft.name = input.to_string();
        }
    }

    /// Replaces the location, uppercased.
    pub fn set_qth(&mut self, input: &str) {
        self.draft.qth = input.to_uppercase();
    }

    /// Replaces the mode (uppercased) and mirrors it into the defaults.
    pub fn set_mode(&mut self, input: &str) {
        self.draft.mode = input.to_uppercase();
        self.defaults.mode = self.draft.mode.clone();
    }

    /// Replaces the frequency and mirrors it into the defaults.
    pub fn set_frequency(&mut self, input: &str) {
        self.draft.frequency = input.to_string();
        self.defaults.frequency = self.draft.frequency.clone();
    }

    /// Replaces the band and mirrors it into the defaults.
    pub fn set_band(&mut self, input: &str) {
        self.draft.band = input.to_string();
        self.defaults.band = self.draft.band.clone();
    }

    /// Replaces the transmitted signal report.
    pub fn set_tx_report(&mut self, input: &str) {
        self.draft.tx_report = input.to_string();
    }

    /// Replaces the received signal report.
    pub fn set_rx_report(&mut self, input: &str) {
        self.draft.rx_report = input.to_string();
    }

    /// Stamps the contact start fields from `stamp`.
    pub fn mark_start(&mut self, stamp: UtcStamp) {
        self.draft.start_date = stamp.date;
        self.draft.start_time = stamp.time;
    }

    /// Stamps the contact end fields from `stamp`.
    pub fn mark_end(&mut self, stamp: UtcStamp) {
        self.draft.end_date = stamp.date;
        self.draft.end_time = stamp.time;
    }
}
