//! Persistence round-trips across simulated restarts
mod common;

use common::seed_tasks;
use std::fs;
use taskpad::{App, Filter, Task, Theme};
use tempfile::TempDir;

#[test]
fn test_tasks_survive_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::open(dir.path());
        seed_tasks(&mut app, &["write report", "mail it"]);
        app.toggle_complete(0).unwrap();
    }

    let app = App::open(dir.path());
    assert_eq!(
        app.snapshot(),
        vec![
            Task { text: "write report".to_string(), completed: true },
            Task { text: "mail it".to_string(), completed: false },
        ]
    );
}

#[test]
fn test_theme_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::open(dir.path());
        app.toggle_theme();
    }

    let app = App::open(dir.path());
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn test_filter_and_edit_session_are_not_persisted() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::open(dir.path());
        seed_tasks(&mut app, &["a"]);
        app.set_filter(Filter::Completed);
        app.begin_edit(0).unwrap();
        // Drop mid-edit; only the collection and theme are durable.
    }

    let app = App::open(dir.path());
    assert_eq!(app.filter(), Filter::All);
    assert!(!app.is_editing());
    assert_eq!(app.pending_text(), "");
}

#[test]
fn test_stored_tasks_are_a_json_array() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(dir.path());
    seed_tasks(&mut app, &["a"]);
    app.toggle_complete(0).unwrap();

    let raw = fs::read_to_string(dir.path().join("tasks")).unwrap();
    let parsed: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, vec![Task { text: "a".to_string(), completed: true }]);
}

#[test]
fn test_stored_theme_is_the_bare_string() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(dir.path());
    app.toggle_theme();

    let raw = fs::read_to_string(dir.path().join("theme")).unwrap();
    assert_eq!(raw, "dark");
}

#[test]
fn test_corrupt_task_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tasks"), "{{{ definitely not json").unwrap();
    fs::write(dir.path().join("theme"), "mauve").unwrap();

    let mut app = App::open(dir.path());
    assert!(app.snapshot().is_empty());
    assert_eq!(app.theme(), Theme::Light);

    // The store still works; the next mutation overwrites the bad value.
    app.submit("fresh start").unwrap();
    let raw = fs::read_to_string(dir.path().join("tasks")).unwrap();
    let parsed: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn test_every_mutation_is_immediately_durable() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(dir.path());

    app.submit("step one").unwrap();
    // A second reader in the same process sees the write immediately.
    let observer = App::open(dir.path());
    assert_eq!(observer.snapshot().len(), 1);

    app.delete(0).unwrap();
    let observer = App::open(dir.path());
    assert!(observer.snapshot().is_empty());
}
