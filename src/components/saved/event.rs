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

//! Input handling and event processing for the saved playlist list.
//!
//! Navigation is handled internally; load and delete intents are returned as
//! actions for the application to apply to the saved store.

use crossterm::event::{Event, KeyCode};

use crate::components::{SavedAction, SavedView};

impl SavedView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        playlist_count: usize,
    ) -> Option<SavedAction> {
        // Internal events
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(playlist_count),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(playlist_count),
                KeyCode::Char('g') => self.goto_first(playlist_count),
                KeyCode::Char('G') => self.goto_last(playlist_count),
                _ => {}
            }
        }

        // External events that result in an action on the saved store
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Enter => self.selected().map(SavedAction::LoadSelected),
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.selected().map(SavedAction::DeleteSelected)
                }
                _ => None,
            },
            _ => None,
        }
    }
}
