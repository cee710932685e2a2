//! Common test utilities for integration tests

use taskpad::App;
use tempfile::TempDir;

/// Create a test app over temporary file-backed storage
#[allow(dead_code)]
pub fn get_test_app() -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let app = App::open(dir.path());
    (app, dir)
}

/// Add several tasks in order
#[allow(dead_code)]
pub fn seed_tasks(app: &mut App, texts: &[&str]) {
    for text in texts {
        app.submit(text).unwrap();
    }
}
