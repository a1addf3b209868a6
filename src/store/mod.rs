// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Key-value persistence layer.
//!
//! This module handles all interactions with the SQLite storage file. The
//! entire saved playlist collection is serialized as one JSON array and kept
//! under a single fixed key, mirroring the mobile-style key-value storage
//! this application's persistence is modelled on.
//!
//! # Table
//!
//! * `kv` - One text value per key. This application only ever touches the
//!   `playlists` row; there is no versioning field and no corruption
//!   detection beyond failing to decode.

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::model::Playlist;

const PLAYLISTS_KEY: &str = "playlists";

/// What can go wrong at the storage boundary. Callers decide how loudly to
/// degrade; nothing in here is fatal to the session.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("storage database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("stored playlists are malformed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Opens the storage database and ensures the schema exists.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so a reader never blocks the
///   writer thread.
/// * **Schema**: Creates the `kv` table if it does not already exist.
///
/// # Arguments
///
/// * `path` - The file system path to the SQLite database file.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or if the schema
/// initialization fails.
pub(crate) fn open(path: &str) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;

    // The WAL pragma returns the resulting mode as a row, so it cannot go
    // through execute_batch.
    let _journal_mode: String =
        conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

    create_schema(&conn)?;

    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;

    Ok(())
}

/// Loads the saved playlist collection from under the fixed key.
///
/// Returns `Ok(None)` when nothing has been stored yet. A present but
/// undecodable value is an error, not a panic; the caller chooses how to
/// degrade.
pub(crate) fn load_playlists(conn: &Connection) -> Result<Option<Vec<Playlist>>, StoreError> {
    let value: Option<String> = conn
        .prepare_cached("SELECT value FROM kv WHERE key = ?1")?
        .query_row(params![PLAYLISTS_KEY], |row| row.get(0))
        .optional()?;

    match value {
        Some(encoded) => Ok(Some(serde_json::from_str(&encoded)?)),
        None => Ok(None),
    }
}

/// Serializes the playlist collection and upserts it under the fixed key.
pub(crate) fn save_playlists(conn: &Connection, playlists: &[Playlist]) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(playlists)?;

    conn.prepare_cached("INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)")?
        .execute(params![PLAYLISTS_KEY, encoded])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    fn sample_playlists() -> Vec<Playlist> {
        vec![
            Playlist {
                name: "Mix".to_string(),
                songs: vec![
                    Song {
                        id: "1700000000000".to_string(),
                        title: "Echoes".to_string(),
                        artist: "Pink Floyd".to_string(),
                    },
                    Song {
                        id: "1700000000001".to_string(),
                        title: "Dogs".to_string(),
                        artist: "Pink Floyd".to_string(),
                    },
                ],
            },
            Playlist {
                name: "Empty".to_string(),
                songs: vec![],
            },
        ]
    }

    #[test]
    fn load_from_a_fresh_store_yields_none() {
        let conn = test_conn();

        assert!(load_playlists(&conn).unwrap().is_none());
    }

    #[test]
    fn round_trip_preserves_names_and_song_order() {
        let conn = test_conn();
        let playlists = sample_playlists();

        save_playlists(&conn, &playlists).unwrap();
        let loaded = load_playlists(&conn).unwrap().unwrap();

        assert_eq!(loaded, playlists);
    }

    #[test]
    fn save_overwrites_the_previous_value() {
        let conn = test_conn();

        save_playlists(&conn, &sample_playlists()).unwrap();
        save_playlists(&conn, &[]).unwrap();

        let loaded = load_playlists(&conn).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn a_corrupt_value_is_an_encoding_error() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)",
            params![PLAYLISTS_KEY, "not json at all"],
        )
        .unwrap();

        match load_playlists(&conn) {
            Err(StoreError::Encoding(_)) => {}
            other => panic!("expected an encoding error, got {other:?}"),
        }
    }
}
