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

//! Keyboard input routing.
//!
//! This is the primary input router of the TUI, translating low-level
//! [`KeyEvent`]s into domain logic. Routing is focus-aware: while an input
//! field has focus every printable key belongs to that field, so the global
//! keys are limited to chords and the Tab cycle, and the single-letter
//! shortcuts only apply while a list has focus.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    components::{DraftAction, SavedAction, SaveBarAction, SongFormAction},
    events::{AppEvent, Focus},
};

use super::handlers::{
    handle_add_song, handle_clear_draft, handle_delete_draft_song, handle_delete_saved,
    handle_load_saved, handle_save_playlist,
};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // The alert is modal: nothing reaches the screen behind it.
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.alert = None;
        }
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Tab, _) => {
            app.focus = app.focus.next();
            return Ok(());
        }
        (KeyCode::BackTab, _) => {
            app.focus = app.focus.previous();
            return Ok(());
        }

        // Esc leaves the fields and lands on the draft list; from a list it
        // goes back to typing.
        (KeyCode::Esc, _) if app.focus.is_input() => {
            app.focus = Focus::Draft;
            return Ok(());
        }
        (KeyCode::Esc, _) => {
            app.focus = Focus::SongTitle;
            return Ok(());
        }

        _ => {}
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::SongTitle | Focus::SongArtist => {
            if let Some(action) = app.song_form.process_event(&event, app.focus) {
                match action {
                    SongFormAction::Submit => handle_add_song(app),
                }
            }
        }

        Focus::PlaylistName => {
            if let Some(action) = app.save_bar.process_event(&event) {
                match action {
                    SaveBarAction::Submit => handle_save_playlist(app),
                }
            }
        }

        Focus::Draft => {
            if let Some(action) = app.draft_view.process_event(&event, app.draft.len()) {
                match action {
                    DraftAction::DeleteSelected(index) => handle_delete_draft_song(app, index),
                    DraftAction::ClearAll => handle_clear_draft(app),
                }
            }
            process_list_key_event(app, key)?;
        }

        Focus::Saved => {
            if let Some(action) = app.saved_view.process_event(&event, app.saved.len()) {
                match action {
                    SavedAction::LoadSelected(index) => handle_load_saved(app, index),
                    SavedAction::DeleteSelected(index) => handle_delete_saved(app, index),
                }
            }
            process_list_key_event(app, key)?;
        }
    }

    Ok(())
}

/// Keys that only make sense while a list has focus.
fn process_list_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if let KeyCode::Char('q') = key.code {
        app.event_tx.send(AppEvent::ExitApplication)?;
    }

    Ok(())
}
