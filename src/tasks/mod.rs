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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload storage I/O
//! from the main UI thread. A dedicated worker loop owns the database
//! connection, translates [`AppTask`] requests into storage operations, and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! The UI dispatches tasks and never waits for them. One channel feeding one
//! worker also means persist tasks are applied in dispatch order, so writes
//! to the single storage key cannot interleave.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use rusqlite::Connection;

use crate::{config::AppConfig, events::AppEvent, model::Playlist, store};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadPlaylists,
    PersistPlaylists(Vec<Playlist>),
}

/// Spawns a background thread to process application tasks.
///
/// The worker opens its own database connection and enters a blocking loop,
/// listening for incoming [`AppTask`]s. Failures are logged and forwarded to
/// the UI as [`AppEvent::Error`]; none of them terminate the session.
///
/// # Arguments
///
/// * `config` - The application configuration (storage location).
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let database_file = config.database_file.clone();

    thread::spawn(move || {
        let conn = match store::open(&database_file) {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Failed to open storage at {database_file}: {e}");
                let _ = event_tx.send(AppEvent::Error(format!(
                    "Storage unavailable, changes will not be saved: {e}"
                )));
                return;
            }
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &conn, &event_tx) {
                log::error!("Task failed: {e}");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, conn: &Connection, event_tx: &Sender<AppEvent>) -> Result<()> {
    match task {
        AppTask::LoadPlaylists => load_playlists(conn, event_tx),
        AppTask::PersistPlaylists(playlists) => persist_playlists(conn, event_tx, playlists),
    }
}

fn load_playlists(conn: &Connection, event_tx: &Sender<AppEvent>) -> Result<()> {
    match store::load_playlists(conn) {
        Ok(Some(playlists)) => event_tx.send(AppEvent::PlaylistsLoaded(playlists))?,
        Ok(None) => event_tx.send(AppEvent::PlaylistsLoaded(Vec::new()))?,
        Err(e) => {
            // Unreadable state degrades to an empty store; the session
            // carries on in memory and the error is reported once.
            event_tx.send(AppEvent::PlaylistsLoaded(Vec::new()))?;
            return Err(e.into());
        }
    }

    Ok(())
}

fn persist_playlists(
    conn: &Connection,
    event_tx: &Sender<AppEvent>,
    playlists: Vec<Playlist>,
) -> Result<()> {
    store::save_playlists(conn, &playlists)?;
    event_tx.send(AppEvent::PlaylistsPersisted(playlists.len()))?;

    Ok(())
}
