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

//! Input handling and event processing for the draft list.
//!
//! Navigation is handled internally; destructive intents are returned as
//! actions for the application to apply to the draft model.

use crossterm::event::{Event, KeyCode};

use crate::components::{DraftAction, DraftView};

impl DraftView {
    pub(crate) fn process_event(&mut self, event: &Event, song_count: usize) -> Option<DraftAction> {
        // Internal events
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(song_count),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(song_count),
                KeyCode::Char('g') => self.goto_first(song_count),
                KeyCode::Char('G') => self.goto_last(song_count),
                _ => {}
            }
        }

        // External events that result in an action on the draft
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.selected().map(DraftAction::DeleteSelected)
                }
                KeyCode::Char('c') => Some(DraftAction::ClearAll),
                _ => None,
            },
            _ => None,
        }
    }
}
