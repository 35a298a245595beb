use crate::core::diagnostics::Diagnostic;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the internal `log` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Write every diagnostic raised by a flow activation.
pub fn record_diagnostics(conn: &Connection, diagnostics: &[Diagnostic]) -> AppResult<()> {
    for d in diagnostics {
        ttlog(conn, d.operation, &d.target, &d.message)?;
    }
    Ok(())
}

pub fn load_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn diagnostics_are_appended_in_order() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        record_diagnostics(
            &conn,
            &[
                Diagnostic::new("permission", "foreground", "denied"),
                Diagnostic::new("geocode", "1.000000,2.000000", "offline"),
            ],
        )
        .unwrap();

        let ops: Vec<String> = load_entries(&conn)
            .unwrap()
            .into_iter()
            .filter(|e| e.operation != "migration_applied")
            .map(|e| format!("{}:{}", e.operation, e.message))
            .collect();
        assert_eq!(ops, vec!["permission:denied", "geocode:offline"]);
    }
}
