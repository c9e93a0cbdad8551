//! Store persistence across process restarts, using the file repository.

use std::fs;

use roster_core::{NewPlayer, RecordInput, summarize};
use runtime::{DEFAULT_STORAGE_KEY, FileRosterRepository, Store};

fn open(dir: &std::path::Path) -> Store {
    let repo = FileRosterRepository::new(dir, DEFAULT_STORAGE_KEY).unwrap();
    Store::load(Box::new(repo))
}

fn innings(opponent: &str, runs: &str, wickets: &str) -> RecordInput {
    RecordInput {
        opponent: opponent.into(),
        runs: runs.into(),
        balls: "30".into(),
        wickets: wickets.into(),
        overs: "4".into(),
        date: "2024-03-01".into(),
    }
}

#[test]
fn roster_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let (kohli, smith, saved) = {
        let mut store = open(dir.path());
        let kohli = store
            .add_player(NewPlayer::new("Virat Kohli", "Batsman", "India").unwrap())
            .unwrap();
        let smith = store
            .add_player(NewPlayer::new("Steve Smith", "All-rounder", "Australia").unwrap())
            .unwrap();
        store.add_record(&kohli, &innings("Australia", "45", "0")).unwrap();
        store.add_record(&kohli, &innings("England", "82", "1")).unwrap();
        let mut spell = innings("India", "12", "2");
        spell.overs = "3.2".into();
        spell.balls = "17".into();
        spell.date = "2024-02-29".into();
        store.add_record(&smith, &spell).unwrap();
        (kohli, smith, store.players().to_vec())
    };

    let store = open(dir.path());
    assert_eq!(store.players(), saved.as_slice());
    assert_eq!(store.len(), 2);
    assert_eq!(store.players()[0].id, kohli);
    assert_eq!(store.players()[1].id, smith);

    let records = &store.player(&kohli).unwrap().records;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].opponent, "England");
    assert_eq!(records[1].opponent, "Australia");

    let summary = summarize(store.player(&kohli).unwrap());
    assert_eq!(summary.matches, 2);
    assert_eq!(summary.total_runs, 127);
    assert_eq!(summary.total_wickets, 1);

    let spell = &store.player(&smith).unwrap().records[0];
    assert_eq!(spell.overs, 3.2);
    assert_eq!(spell.balls, 17);
    assert_eq!(spell.date, "2024-02-29");
}

#[test]
fn document_is_a_json_array_under_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    let id = store
        .add_player(NewPlayer::new("Test", "Bowler", "India").unwrap())
        .unwrap();
    store.add_record(&id, &innings("Pakistan", "abc", "3")).unwrap();

    let path = dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json"));
    let raw = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let players = value.as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["name"], "Test");
    assert_eq!(players[0]["records"][0]["runs"], 0);
    assert_eq!(players[0]["records"][0]["wickets"], 3);
}

#[test]
fn corrupt_file_loads_empty_and_is_replaced_on_next_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json"));
    fs::write(&path, "{ not json").unwrap();

    let mut store = open(dir.path());
    assert!(store.is_empty());

    store
        .add_player(NewPlayer::new("Test", "Batsman", "India").unwrap())
        .unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn legacy_timestamp_ids_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json"));
    fs::write(
        &path,
        r#"[{"id":"1712345678901","name":"Old","role":"Batsman","country":"India",
            "records":[{"id":"1712345679000","opponent":"SA","runs":12,"balls":9,
            "wickets":0,"overs":0,"date":"2024-04-05"}]}]"#,
    )
    .unwrap();

    let store = open(dir.path());
    assert_eq!(store.len(), 1);
    assert_eq!(store.players()[0].id.as_str(), "1712345678901");
    assert_eq!(store.players()[0].records[0].runs, 12);
}
