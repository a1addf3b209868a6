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

//! Song entry form state.
//!
//! Two text inputs, one for the song title and one for the artist.
//! Submitting either field asks the application to add the pair to the
//! draft; the form itself applies no validation.

mod event;

use tui_input::Input;

pub(crate) struct SongForm {
    pub(crate) title: Input,
    pub(crate) artist: Input,
}

pub(crate) enum SongFormAction {
    Submit,
}

impl SongForm {
    pub(crate) fn new() -> Self {
        Self {
            title: Input::default(),
            artist: Input::default(),
        }
    }

    pub(crate) fn title_value(&self) -> String {
        self.title.value().to_string()
    }

    pub(crate) fn artist_value(&self) -> String {
        self.artist.value().to_string()
    }

    /// Clears both fields, ready for the next song.
    pub(crate) fn reset(&mut self) {
        self.title.reset();
        self.artist.reset();
    }
}
