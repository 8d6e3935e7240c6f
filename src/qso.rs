//! QSO record model: stored entries, the in-progress draft, and sticky defaults.

use serde::{Deserialize, Serialize};

/// One stored contact, keyed externally by its callsign.
///
/// Every field defaults to the empty string, and every field is tagged
/// `#[serde(default)]` so a key missing from persisted JSON deserializes
/// identically to a present-but-empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QsoEntry {
    /// Operator name of the contacted station.
    #[serde(default)]
    pub name: String,
    /// Location (QTH) of the contacted station.
    #[serde(default)]
    pub qth: String,
    /// Emission mode, free text.
    #[serde(default)]
    pub mode: String,
    /// Frequency, free text.
    #[serde(default)]
    pub frequency: String,
    /// Band, free text.
    #[serde(default)]
    pub band: String,
    /// Transmitted signal report.
    #[serde(default)]
    pub tx_report: String,
    /// Received signal report.
    #[serde(default)]
    pub rx_report: String,
    /// UTC date the contact started, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: String,
    /// UTC time the contact started, `HH:MM:SS`.
    #[serde(default)]
    pub start_time: String,
    /// UTC date the contact ended, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: String,
    /// UTC time the contact ended, `HH:MM:SS`.
    #[serde(default)]
    pub end_time: String,
}

/// The record being assembled for the current contact.
///
/// A draft with an empty callsign is a valid transient state; it is discarded
/// on save rather than persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QsoDraft {
    /// Callsign of the contacted station, uppercased; becomes the store key.
    pub callsign: String,
    /// Operator name of the contacted station.
    pub name: String,
    /// Location (QTH) of the contacted station.
    pub qth: String,
    /// Emission mode, free text.
    pub mode: String,
    /// Frequency, free text.
    pub frequency: String,
    /// Band, free text.
    pub band: String,
    /// Transmitted signal report.
    pub tx_report: String,
    /// Received signal report.
    pub rx_report: String,
    /// UTC date the contact started.
    pub start_date: String,
    /// UTC time the contact started.
    pub start_time: String,
    /// UTC date the contact ended.
    pub end_date: String,
    /// UTC time the contact ended.
    pub end_time: String,
}

impl QsoDraft {
    /// Fresh draft with the sticky fields pre-filled and everything else empty.
    pub fn from_defaults(defaults: &StickyDefaults) -> Self {
        Self {
            mode: defaults.mode.clone(),
            frequency: defaults.frequency.clone(),
            band: defaults.band.clone(),
            ..Self::default()
        }
    }

    /// Projects the draft onto a stored entry; the callsign is dropped here
    /// because it becomes the store's map key.
    pub fn to_entry(&self) -> QsoEntry {
        QsoEntry {
            name: self.name.clone(),
            qth: self.qth.clone(),
            mode: self.mode.clone(),
            frequency: self.frequency.clone(),
            band: self.band.clone(),
            tx_report: self.tx_report.clone(),
            rx_report: self.rx_report.clone(),
            start_date: self.start_date.clone(),
            start_time: self.start_time.clone(),
            end_date: self.end_date.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

/// Field values carried into the next draft after a save or reset.
///
/// Consecutive contacts usually share these, so they survive draft resets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StickyDefaults {
    /// Last entered mode.
    pub mode: String,
    /// Last entered frequency.
    pub frequency: String,
    /// Last entered band.
    pub band: String,
}
