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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the songs the
//! user types in, and the named playlists they are collected into. Both types
//! serialize with serde; the persisted value is exactly the JSON the derives
//! produce, with no versioning wrapper around it.

pub(crate) mod draft;
pub(crate) mod saved;

use serde::{Deserialize, Serialize};

/// One entry of a playlist. The id is an opaque, timestamp-derived string,
/// unique within the draft that minted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Song {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
}

/// A named snapshot of a draft. Names are not required to be unique within
/// the saved store; operations that address playlists by name affect every
/// playlist carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Playlist {
    pub(crate) name: String,
    pub(crate) songs: Vec<Song>,
}
