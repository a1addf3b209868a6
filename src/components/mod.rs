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

//! Interactive screen components.
//!
//! Each component pairs its view state with event processing; the domain
//! data itself lives in [`crate::model`] and is passed in where needed.
//! Components translate raw terminal events into small action enums, and the
//! event handlers decide what those actions mean for the application state.

pub(crate) mod draft;
pub(crate) mod save_bar;
pub(crate) mod saved;
pub(crate) mod song_form;

pub(crate) use draft::{DraftAction, DraftView};
pub(crate) use save_bar::{SaveBar, SaveBarAction};
pub(crate) use saved::{SavedAction, SavedView};
pub(crate) use song_form::{SongForm, SongFormAction};
