use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{find, init_empty_db, load_todos, rtd, run_ok, setup_test_db};

#[test]
fn test_first_run_seeds_tutorial_tasks() {
    let db_path = setup_test_db("first_run_seed");

    rtd()
        .args(["--db", &db_path, "--test", "list", "--filter", "all"])
        .assert()
        .success()
        .stdout(contains("Welcome! Complete a task"))
        .stdout(contains("in today's list").not());

    rtd()
        .args(["--db", &db_path, "--test", "list", "--filter", "today"])
        .assert()
        .success()
        .stdout(contains("This task is in today's list"));

    let todos = load_todos(&db_path);
    assert_eq!(todos.len(), 2);
    assert!(!todos[0].is_today);
    assert!(todos[1].is_today);
}

#[test]
fn test_tutorial_is_never_seeded_twice() {
    let db_path = init_empty_db("seed_once");

    rtd()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Add your first task"));

    rtd()
        .args(["--db", &db_path, "--test", "list", "--filter", "today"])
        .assert()
        .success()
        .stdout(contains("No tasks for today"));

    assert!(load_todos(&db_path).is_empty());
}

#[test]
fn test_add_and_list() {
    let db_path = init_empty_db("add_list");

    rtd()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Buy milk",
            "--details",
            "2 litres",
            "--hours",
            "1",
            "--minutes",
            "30",
            "--due",
            "2025-09-15",
        ])
        .assert()
        .success()
        .stdout(contains("Added 'Buy milk'"));

    rtd()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Buy milk"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("01h 30m"))
        .stdout(contains("Planned effort: 01h 30m"));

    let todos = load_todos(&db_path);
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].details, "2 litres");
    assert!(!todos[0].is_done);
}

#[test]
fn test_add_today_goes_to_today_list_only() {
    let db_path = init_empty_db("add_today");

    run_ok(&db_path, &["add", "Planned later"]);
    run_ok(&db_path, &["add", "Do it now", "--today"]);

    rtd()
        .args(["--db", &db_path, "--test", "list", "--filter", "today"])
        .assert()
        .success()
        .stdout(contains("Do it now"))
        .stdout(contains("Planned later").not());

    rtd()
        .args(["--db", &db_path, "--test", "list", "--filter", "all"])
        .assert()
        .success()
        .stdout(contains("Planned later"))
        .stdout(contains("Do it now").not());
}

#[test]
fn test_blank_title_is_rejected() {
    let db_path = init_empty_db("blank_title");
    run_ok(&db_path, &["add", "keep me"]);

    rtd()
        .args(["--db", &db_path, "--test", "add", "   "])
        .assert()
        .success()
        .stdout(contains("nothing was added"));

    let todos = load_todos(&db_path);
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "keep me");
}

#[test]
fn test_estimate_is_clamped() {
    let db_path = init_empty_db("estimate_clamp");

    rtd()
        .args([
            "--db", &db_path, "--test", "add", "Long job", "--hours", "20", "--minutes", "50",
        ])
        .assert()
        .success()
        .stdout(contains("Estimate adjusted to 12h 45m"));

    let todos = load_todos(&db_path);
    assert_eq!(todos[0].estimated_hours, 12);
    assert_eq!(todos[0].estimated_minutes, 45);
}

#[test]
fn test_done_toggles_and_moves_between_sections() {
    let db_path = init_empty_db("done_toggle");
    run_ok(&db_path, &["add", "Write report"]);
    let id = load_todos(&db_path)[0].short_id();

    rtd()
        .args(["--db", &db_path, "--test", "done", &id])
        .assert()
        .success()
        .stdout(contains("Completed 'Write report'"));
    assert!(load_todos(&db_path)[0].is_done);

    rtd()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Done"))
        .stdout(contains("(nothing pending)"));

    rtd()
        .args(["--db", &db_path, "--test", "done", &id])
        .assert()
        .success()
        .stdout(contains("Back to pending"));
    assert!(!load_todos(&db_path)[0].is_done);
}

#[test]
fn test_today_toggle_and_explicit_flags() {
    let db_path = init_empty_db("today_toggle");
    run_ok(&db_path, &["add", "Call mum"]);
    let id = load_todos(&db_path)[0].short_id();

    run_ok(&db_path, &["today", &id]);
    assert!(load_todos(&db_path)[0].is_today);

    run_ok(&db_path, &["today", &id]);
    assert!(!load_todos(&db_path)[0].is_today);

    run_ok(&db_path, &["today", &id, "--on"]);
    run_ok(&db_path, &["today", &id, "--on"]);
    assert!(load_todos(&db_path)[0].is_today);

    run_ok(&db_path, &["today", &id, "--off"]);
    assert!(!load_todos(&db_path)[0].is_today);
}

#[test]
fn test_delete_keeps_order_of_others() {
    let db_path = init_empty_db("delete_order");
    for title in ["a", "b", "c", "d"] {
        run_ok(&db_path, &["add", title]);
    }
    let todos = load_todos(&db_path);
    let b = find(&todos, "b").short_id();

    rtd()
        .args(["--db", &db_path, "--test", "del", "--yes", &b])
        .assert()
        .success()
        .stdout(contains("Deleted 'b'"));

    let titles: Vec<String> = load_todos(&db_path).into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["a", "c", "d"]);
}

#[test]
fn test_delete_can_be_cancelled() {
    let db_path = init_empty_db("delete_cancel");
    run_ok(&db_path, &["add", "Stay"]);
    let id = load_todos(&db_path)[0].short_id();

    rtd()
        .args(["--db", &db_path, "--test", "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(load_todos(&db_path).len(), 1);
}

#[test]
fn test_edit_updates_fields_but_rejects_blank_title() {
    let db_path = init_empty_db("edit");
    run_ok(&db_path, &["add", "Draft"]);
    let before = load_todos(&db_path).remove(0);
    let id = before.short_id();

    rtd()
        .args([
            "--db", &db_path, "--test", "edit", &id, "--title", "Final", "--due", "2030-01-02 10:15",
        ])
        .assert()
        .success()
        .stdout(contains("Edited 'Final'"));

    let after = load_todos(&db_path).remove(0);
    assert_eq!(after.id(), before.id());
    assert_eq!(after.created_at(), before.created_at());
    assert_eq!(after.title, "Final");
    assert_eq!(after.due_date.format("%Y-%m-%d %H:%M").to_string(), "2030-01-02 10:15");

    rtd()
        .args(["--db", &db_path, "--test", "edit", &id, "--title", "  "])
        .assert()
        .success()
        .stdout(contains("was not changed"));
    assert_eq!(load_todos(&db_path)[0].title, "Final");
}

#[test]
fn test_move_reorders_stored_list() {
    let db_path = init_empty_db("move");
    for title in ["one", "two", "three"] {
        run_ok(&db_path, &["add", title]);
    }
    let three = find(&load_todos(&db_path), "three").short_id();

    rtd()
        .args(["--db", &db_path, "--test", "move", &three, "1"])
        .assert()
        .success()
        .stdout(contains("Moved to position 1"));

    let titles: Vec<String> = load_todos(&db_path).into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["three", "one", "two"]);

    rtd()
        .args(["--db", &db_path, "--test", "move", &three, "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid list position"));
}

#[test]
fn test_show_prints_details() {
    let db_path = init_empty_db("show");
    run_ok(
        &db_path,
        &["add", "牛乳を買う", "--details", "Low-fat, from the corner shop"],
    );
    let id = load_todos(&db_path)[0].short_id();

    rtd()
        .args(["--db", &db_path, "--test", "show", &id])
        .assert()
        .success()
        .stdout(contains("牛乳を買う"))
        .stdout(contains("Pending"))
        .stdout(contains("corner shop"));
}

#[test]
fn test_unknown_id_and_bad_date_fail() {
    let db_path = init_empty_db("errors");

    rtd()
        .args(["--db", &db_path, "--test", "done", "ffffffff"])
        .assert()
        .failure()
        .stderr(contains("No task matches id 'ffffffff'"));

    rtd()
        .args(["--db", &db_path, "--test", "add", "x", "--due", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(load_todos(&db_path).is_empty());
}

#[test]
fn test_internal_log_records_mutations() {
    let db_path = init_empty_db("internal_log");
    run_ok(&db_path, &["add", "Logged task"]);

    rtd()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("Added 'Logged task'"))
        .stdout(contains("del"));
}

#[test]
fn test_onboarding_shown_once_and_resettable() {
    let db_path = setup_test_db("onboarding");

    rtd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Welcome to rtodo"));

    rtd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Welcome to rtodo").not());

    rtd()
        .args(["--db", &db_path, "settings", "--reset-onboarding"])
        .assert()
        .success()
        .stdout(contains("Settings"));

    rtd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Welcome to rtodo"));

    // onboarding never touches the task list
    assert_eq!(load_todos(&db_path).len(), 2);
}

#[test]
fn test_schema_notes_are_printed_by_init_only() {
    let db_path = setup_test_db("schema_notes");

    rtd()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Created kv table").not());

    let fresh = setup_test_db("schema_notes_init");
    rtd()
        .args(["--db", &fresh, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created kv table"));
}
