//! SQLite persistence for the transition catalog.
//!
//! The store itself does no I/O; every mutation made through the CLI is
//! mirrored here so the catalog survives between runs.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;

use crate::transition::Transition;

/// Open the catalog database at `db_path`, creating the file if needed.
pub fn connect(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open catalog database at {}", db_path.display()))?;
    Ok(conn)
}

/// Create the transition table if this is a fresh database.
pub fn init(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS transition (
            id         INTEGER PRIMARY KEY,
            from_song  TEXT NOT NULL,
            to_song    TEXT NOT NULL,
            notes      TEXT,
            created_at TEXT NOT NULL
        )",
        (),
    )
    .context("Failed to create the transition table")?;
    Ok(())
}

/// All persisted transitions, oldest first.
pub fn load_transitions(conn: &Connection) -> Result<Vec<Transition>> {
    let mut stmt = conn
        .prepare("SELECT id, from_song, to_song, notes, created_at FROM transition ORDER BY id")
        .context("Failed to prepare transition query")?;

    let rows = stmt
        .query_map([], |row| {
            let created_raw: String = row.get(4)?;
            let created_at = DateTime::parse_from_rfc3339(&created_raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
            Ok(Transition {
                id: row.get(0)?,
                from: row.get(1)?,
                to: row.get(2)?,
                notes: row.get(3)?,
                created_at,
            })
        })
        .context("Failed to query transitions")?;

    let mut transitions = Vec::new();
    for row in rows {
        transitions.push(row.context("Failed to read a persisted transition")?);
    }

    log::debug!("Loaded {} transition(s) from the database.", transitions.len());
    Ok(transitions)
}

/// Persist one freshly catalogued transition.
pub fn insert_transition(conn: &Connection, transition: &Transition) -> Result<()> {
    conn.execute(
        "INSERT INTO transition (id, from_song, to_song, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            transition.id,
            &transition.from,
            &transition.to,
            &transition.notes,
            transition.created_at.to_rfc3339(),
        ),
    )
    .with_context(|| format!("Failed to persist transition {}", transition.edge_label()))?;
    Ok(())
}

/// Delete the persisted transition with `id`. Returns whether a row went
/// away, mirroring the store's delete contract.
pub fn delete_transition(conn: &Connection, id: u32) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM transition WHERE id = ?1", [id])
        .with_context(|| format!("Failed to delete transition {id}"))?;
    Ok(affected > 0)
}

/// Remove every persisted transition.
pub fn clear(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM transition", ())
        .context("Failed to clear the transition table")?;
    Ok(())
}

/// Replace the whole table with `transitions` in one transaction.
/// Used by snapshot import, where partial writes would corrupt the catalog.
pub fn replace_all(conn: &mut Connection, transitions: &[Transition]) -> Result<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM transition", ())
        .context("Failed to clear the transition table before import")?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO transition (id, from_song, to_song, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for t in transitions {
            stmt.execute((
                t.id,
                &t.from,
                &t.to,
                &t.notes,
                t.created_at.to_rfc3339(),
            ))
            .with_context(|| format!("Failed to import transition {}", t.edge_label()))?;
        }
    }

    tx.commit().context("Committing the import transaction failed")?;
    Ok(())
}
