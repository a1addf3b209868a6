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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic of the application,
//! bridging user input (keyboard), task worker results (storage), and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events arrive as [`AppEvent`]s on a single channel fed by
//!    the input thread, the tick thread, and the task worker.
//! 2. **Process**: [`process_events`] updates the [`App`] state and, for
//!    confirmed saved-store mutations, dispatches persist tasks to the
//!    worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Playlist, render::draw};

use handlers::{handle_error, handle_playlists_loaded, handle_playlists_persisted};
use key_handlers::process_key_event;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    PlaylistsLoaded(Vec<Playlist>),
    PlaylistsPersisted(usize),

    Tick,

    ExitApplication,

    Error(String),
}

/// The input regions of the single screen, in Tab order.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Focus {
    #[default]
    SongTitle,
    SongArtist,
    PlaylistName,
    Draft,
    Saved,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::SongTitle => Focus::SongArtist,
            Focus::SongArtist => Focus::PlaylistName,
            Focus::PlaylistName => Focus::Draft,
            Focus::Draft => Focus::Saved,
            Focus::Saved => Focus::SongTitle,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::SongTitle => Focus::Saved,
            Focus::SongArtist => Focus::SongTitle,
            Focus::PlaylistName => Focus::SongArtist,
            Focus::Draft => Focus::PlaylistName,
            Focus::Saved => Focus::Draft,
        }
    }

    pub(crate) fn is_input(self) -> bool {
        matches!(
            self,
            Focus::SongTitle | Focus::SongArtist | Focus::PlaylistName
        )
    }
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::PlaylistsLoaded(playlists) => handle_playlists_loaded(app, playlists),
            AppEvent::PlaylistsPersisted(count) => handle_playlists_persisted(app, count),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
