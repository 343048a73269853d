#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtodo::core::store::TodoStore;
use rtodo::db::kv::SqliteKv;
use rtodo::models::todo::Todo;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtd() -> Command {
    cargo_bin_cmd!("rtodo")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtodo.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Run rtodo in test mode against `db_path` and assert success.
pub fn run_ok(db_path: &str, args: &[&str]) -> String {
    let mut full = vec!["--db", db_path, "--test"];
    full.extend_from_slice(args);
    let out = rtd().args(&full).output().expect("failed to run rtodo");
    assert!(
        out.status.success(),
        "rtodo {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Current task list as stored in the database.
pub fn load_todos(db_path: &str) -> Vec<Todo> {
    let kv = SqliteKv::open(db_path).expect("open db");
    TodoStore::load(kv).expect("load tasks").todos().to_vec()
}

pub fn find<'a>(todos: &'a [Todo], title: &str) -> &'a Todo {
    todos
        .iter()
        .find(|t| t.title == title)
        .unwrap_or_else(|| panic!("no task titled {title}"))
}

/// Fresh database with the tutorial tasks removed.
pub fn init_empty_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    run_ok(&db_path, &["init"]);
    for t in load_todos(&db_path) {
        run_ok(&db_path, &["del", "--yes", &t.short_id()]);
    }
    db_path
}
