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

//! Playlist name entry state.
//!
//! One text input. Submitting it asks the application to snapshot the draft
//! under the typed name; the empty-name check belongs to the save handler,
//! not to this component.

mod event;

use tui_input::Input;

pub(crate) struct SaveBar {
    pub(crate) input: Input,
}

pub(crate) enum SaveBarAction {
    Submit,
}

impl SaveBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> String {
        self.input.value().to_string()
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
    }
}
