//! External callsign lookup collaborator.

use tracing::warn;

const QRZ_URL: &str = "https://www.qrz.com/db";

/// Fire-and-forget callsign lookup; no result is returned or consumed.
pub trait CallsignLookup {
    /// Looks up `callsign` in an external viewer.
    fn lookup(&self, callsign: &str);
}

/// Opens the QRZ page for a callsign in the host's default browser.
#[derive(Debug, Clone)]
pub struct WebLookup {
    base: String,
}

impl Default for WebLookup {
    fn default() -> Self {
        Self {
            base: QRZ_URL.to_string(),
        }
    }
}

impl WebLookup {
    /// Lookup against a custom base URL.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl CallsignLookup for WebLookup {
    fn lookup(&self, callsign: &str) {
        if callsign.is_empty() {
            return;
        }
        let url = format!("{}/{}", self.base, callsign);
        if let Err(err) = open::that(&url) {
            warn!(%err, %url, "callsign lookup failed to open");
        }
    }
}
