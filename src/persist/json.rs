//! JSON file sink: primary database plus shadow recovery copy.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::core::store::LogStore;
use crate::qso::QsoEntry;

use super::{PersistError, PersistResult};

/// Default path of the primary log database.
pub const DB_FILE: &str = "db.json";
/// Default path of the crash-recovery copy.
pub const RECOVERY_FILE: &str = "tmp.json";

/// Loads and writes the whole store as a JSON object keyed by callsign.
///
/// The primary file is rewritten on explicit save via a temporary sibling and
/// rename; the recovery file is rewritten wholesale after every successful
/// append and is never read back by [`JsonSink::load`].
#[derive(Debug, Clone)]
pub struct JsonSink {
    primary: PathBuf,
    recovery: PathBuf,
}

impl Default for JsonSink {
    fn default() -> Self {
        Self::new(DB_FILE, RECOVERY_FILE)
    }
}

impl JsonSink {
    /// Creates a sink over explicit primary and recovery paths.
    pub fn new(primary: impl Into<PathBuf>, recovery: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            recovery: recovery.into(),
        }
    }

    /// Path of the primary database file.
    pub fn primary_path(&self) -> &Path {
        &self.primary
    }

    /// Path of the recovery file.
    pub fn recovery_path(&self) -> &Path {
        &self.recovery
    }

    /// Loads the primary database, or an empty store when the file is absent.
    ///
    /// A present-but-unparsable file surfaces as [`PersistError::Corrupt`]
    /// and is never silently replaced.
    pub fn load(&self) -> PersistResult<LogStore> {
        let text = match fs::read_to_string(&self.primary) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.primary.display(), "no log database, starting empty");
                return Ok(LogStore::new());
            }
            Err(err) => {
                return Err(PersistError::Read {
                    path: self.primary.clone(),
                    source: err,
                });
            }
        };

        let corrupt = |err| PersistError::Corrupt {
            path: self.primary.clone(),
            source: err,
        };
        let raw: Map<String, Value> = serde_json::from_str(&text).map_err(corrupt)?;
        let mut parts = Vec::with_capacity(raw.len());
        for (callsign, value) in raw {
            let entries: Vec<QsoEntry> = serde_json::from_value(value).map_err(corrupt)?;
            parts.push((callsign, entries));
        }

        let store = LogStore::from_parts(parts);
        info!(
            callsigns = store.len(),
            contacts = store.contact_count(),
            "log database loaded"
        );
        Ok(store)
    }

    /// Writes the whole store to the primary path, overwriting it. The write
    /// goes to a temporary sibling first and is renamed into place, so an
    /// interrupted save never leaves a half-written primary file.
    pub fn save(&self, store: &LogStore) -> PersistResult<()> {
        write_atomic(&self.primary, &encode(store)?)?;
        debug!(path = %self.primary.display(), "log database saved");
        Ok(())
    }

    /// Rewrites the recovery copy; called after every successful append so an
    /// abnormal exit loses at most the in-progress draft.
    pub fn save_recovery(&self, store: &LogStore) -> PersistResult<()> {
        write_atomic(&self.recovery, &encode(store)?)?;
        debug!(path = %self.recovery.display(), "recovery copy updated");
        Ok(())
    }
}

fn encode(store: &LogStore) -> PersistResult<String> {
    let mut root = Map::new();
    for (callsign, entries) in store.iter() {
        let value = serde_json::to_value(entries).map_err(PersistError::Encode)?;
        root.insert(callsign.to_string(), value);
    }
    serde_json::to_string_pretty(&Value::Object(root)).map_err(PersistError::Encode)
}

fn write_atomic(path: &Path, contents: &str) -> PersistResult<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(|err| PersistError::Write {
        path: tmp.clone(),
        source: err,
    })?;
    fs::rename(&tmp, path).map_err(|err| PersistError::Write {
        path: path.to_path_buf(),
        source: err,
    })
}
