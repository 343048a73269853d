use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name = ?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the key-value table holding the task list and the app flags.
fn migrate_create_kv_table(conn: &Connection) -> Result<Option<String>> {
    let version = "20250901_0001_create_kv";

    if table_exists(conn, "kv")? {
        return Ok(None);
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      BLOB NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;

    mark_applied(conn, version, "Created key-value table")?;
    Ok(Some("Created kv table.".to_string()))
}

/// Early databases stored only (key, value).
fn migrate_add_updated_at(conn: &Connection) -> Result<Option<String>> {
    let version = "20250915_0002_kv_updated_at";

    if table_has_column(conn, "kv", "updated_at")? || migration_applied(conn, version)? {
        return Ok(None);
    }

    conn.execute(
        "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;

    mark_applied(conn, version, "Added updated_at to kv")?;
    Ok(Some(format!(
        "Migration applied: {} → added 'updated_at' to kv table",
        version
    )))
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db() every time the store is opened. Nothing is
/// printed here; the returned notes (one per applied migration) are shown
/// by `init` only.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let notes = [migrate_create_kv_table(conn)?, migrate_add_updated_at(conn)?];
    Ok(notes.into_iter().flatten().collect())
}
