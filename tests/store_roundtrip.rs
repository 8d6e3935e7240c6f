use std::fs;

use tempfile::TempDir;

use hamlog::core::store::LogStore;
use hamlog::persist::PersistError;
use hamlog::persist::json::JsonSink;
use hamlog::qso::QsoEntry;

fn entry(name: &str, mode: &str, band: &str) -> QsoEntry {
    QsoEntry {
        name: name.to_string(),
        mode: mode.to_string(),
        band: band.to_string(),
        frequency: "14.200".to_string(),
        end_date: "2026-08-07".to_string(),
        end_time: "12:34:56".to_string(),
        ..QsoEntry::default()
    }
}

fn sink_in(tmp: &TempDir) -> JsonSink {
    JsonSink::new(tmp.path().join("db.json"), tmp.path().join("tmp.json"))
}

#[test]
fn save_then_load_round_trips_records_and_order() {
    let tmp = TempDir::new().expect("tmp");
    let sink = sink_in(&tmp);

    let mut store = LogStore::new();
    assert!(store.append("W1AW", entry("JOHN", "SSB", "20m")));
    assert!(store.append("K2XYZ", entry("ANNE", "CW", "40m")));
    assert!(store.append("W1AW", entry("JOHN", "CW", "40m")));

    sink.save(&store).expect("save");
    let reloaded = sink.load().expect("load");

    assert_eq!(reloaded, store);
    let calls: Vec<&str> = reloaded.iter().map(|(call, _)| call).collect();
    assert_eq!(calls, ["W1AW", "K2XYZ"]);
    assert_eq!(reloaded.entries_for("W1AW").map(<[QsoEntry]>::len), Some(2));
}

#[test]
fn missing_file_loads_an_empty_store() {
    let tmp = TempDir::new().expect("tmp");
    let store = sink_in(&tmp).load().expect("load");
    assert!(store.is_empty());
}

#[test]
fn corrupt_file_is_surfaced_not_discarded() {
    let tmp = TempDir::new().expect("tmp");
    let sink = sink_in(&tmp);
    fs::write(sink.primary_path(), "{ not json").expect("write");

    let err = sink.load().expect_err("corrupt file must not load");
    assert!(matches!(err, PersistError::Corrupt { .. }));

    // The file must be left exactly as it was.
    let after = fs::read_to_string(sink.primary_path()).expect("read");
    assert_eq!(after, "{ not json");
}

#[test]
fn wrong_shape_is_corrupt_too() {
    let tmp = TempDir::new().expect("tmp");
    let sink = sink_in(&tmp);
    fs::write(sink.primary_path(), r#"{"W1AW": {"name": "JOHN"}}"#).expect("write");

    let err = sink.load().expect_err("non-list value must not load");
    assert!(matches!(err, PersistError::Corrupt { .. }));
}

#[test]
fn empty_callsign_append_is_discarded() {
    let mut store = LogStore::new();
    assert!(!store.append("", entry("JOHN", "SSB", "20m")));
    assert!(store.is_empty());
    assert_eq!(store.contact_count(), 0);
    assert!(store.history("").is_none());
}

#[test]
fn recovery_copy_uses_the_same_format_as_the_primary() {
    let tmp = TempDir::new().expect("tmp");
    let sink = sink_in(&tmp);

    let mut store = LogStore::new();
    assert!(store.append("W1AW", entry("JOHN", "SSB", "20m")));
    sink.save_recovery(&store).expect("recovery write");

    // A sink pointed at the recovery file loads the identical store.
    let from_recovery = JsonSink::new(sink.recovery_path(), tmp.path().join("unused.json"))
        .load()
        .expect("load recovery");
    assert_eq!(from_recovery, store);
    assert!(!sink.primary_path().exists());
}

#[test]
fn save_overwrites_and_leaves_no_temp_file() {
    let tmp = TempDir::new().expect("tmp");
    let sink = sink_in(&tmp);

    let mut first = LogStore::new();
    assert!(first.append("W1AW", entry("JOHN", "SSB", "20m")));
    sink.save(&first).expect("first save");

    let mut second = LogStore::new();
    assert!(second.append("K2XYZ", entry("ANNE", "CW", "40m")));
    sink.save(&second).expect("second save");

    assert_eq!(sink.load().expect("load"), second);
    assert!(!tmp.path().join("db.json.tmp").exists());
}

#[test]
fn write_failure_is_reported_and_keeps_the_store_valid() {
    let tmp = TempDir::new().expect("tmp");
    let missing_dir = tmp.path().join("missing");
    let sink = JsonSink::new(missing_dir.join("db.json"), missing_dir.join("tmp.json"));

    let mut store = LogStore::new();
    assert!(store.append("W1AW", entry("JOHN", "SSB", "20m")));

    let err = sink.save(&store).expect_err("save into missing dir must fail");
    assert!(matches!(err, PersistError::Write { .. }));
    assert_eq!(store.contact_count(), 1);
}

#[test]
fn reload_then_save_preserves_key_order_and_fills_missing_fields() {
    let tmp = TempDir::new().expect("tmp");
    let sink = sink_in(&tmp);

    // Keys deliberately not alphabetical, entries deliberately sparse.
    let original = r#"{"ZZ9ZZZ": [{"mode": "CW"}], "AA1AAA": [{"name": "BOB"}, {}]}"#;
    fs::write(sink.primary_path(), original).expect("write");

    let store = sink.load().expect("load");
    let calls: Vec<&str> = store.iter().map(|(call, _)| call).collect();
    assert_eq!(calls, ["ZZ9ZZZ", "AA1AAA"]);

    // Missing keys behave exactly like present-but-empty ones.
    let zz = &store.entries_for("ZZ9ZZZ").expect("zz")[0];
    assert_eq!(zz.mode, "CW");
    assert_eq!(zz.name, "");
    assert_eq!(zz.end_date, "");

    sink.save(&store).expect("save");
    let text = fs::read_to_string(sink.primary_path()).expect("read");
    let reparsed: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&text).expect("reparse");
    let keys: Vec<&String> = reparsed.keys().collect();
    assert_eq!(keys, ["ZZ9ZZZ", "AA1AAA"]);

    // And the rewritten file loads back to the same store.
    assert_eq!(sink.load().expect("reload"), store);
}
