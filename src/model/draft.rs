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

//! Draft playlist state.
//!
//! This module provides state for the playlist currently being assembled,
//! managing the ordered list of songs and the minting of song ids.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{Playlist, Song};

pub(crate) struct Draft {
    songs: Vec<Song>,
    // Highest id handed out so far. Ids come from the wall clock in
    // milliseconds; the watermark keeps them strictly increasing when two
    // adds land within the same millisecond.
    last_id: u64,
}

impl Draft {
    pub(crate) fn new() -> Self {
        Self {
            songs: Vec::new(),
            last_id: 0,
        }
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn len(&self) -> usize {
        self.songs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Appends a song to the end of the draft.
    ///
    /// An empty title or artist makes this a no-op; anything else is
    /// accepted as typed, duplicate pairs included.
    pub(crate) fn add_song(&mut self, title: &str, artist: &str) -> bool {
        if title.is_empty() || artist.is_empty() {
            return false;
        }

        let id = self.mint_id();
        self.songs.push(Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        });

        true
    }

    /// Removes the song with the given id, keeping the remaining songs in
    /// order. Unknown ids are ignored.
    pub(crate) fn delete_song(&mut self, id: &str) -> bool {
        let before = self.songs.len();
        self.songs.retain(|song| song.id != id);
        self.songs.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.songs.clear();
    }

    /// Replaces the draft contents with the songs of a loaded playlist.
    ///
    /// The incoming ids are folded into the watermark so that later adds
    /// cannot collide with them.
    pub(crate) fn replace(&mut self, songs: Vec<Song>) {
        self.last_id = songs
            .iter()
            .filter_map(|song| song.id.parse().ok())
            .fold(self.last_id, u64::max);
        self.songs = songs;
    }

    /// Drains the draft into a named playlist snapshot, leaving the draft
    /// empty.
    pub(crate) fn take_snapshot(&mut self, name: &str) -> Playlist {
        Playlist {
            name: name.to_string(),
            songs: std::mem::take(&mut self.songs),
        }
    }

    fn mint_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);

        self.last_id = now.max(self.last_id.saturating_add(1));
        self.last_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(pairs: &[(&str, &str)]) -> Draft {
        let mut draft = Draft::new();
        for (title, artist) in pairs {
            assert!(draft.add_song(title, artist));
        }
        draft
    }

    #[test]
    fn add_song_appends_to_the_end() {
        let draft = draft_with(&[("Echoes", "Pink Floyd"), ("Dogs", "Pink Floyd")]);

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.songs()[1].title, "Dogs");
        assert_eq!(draft.songs()[1].artist, "Pink Floyd");
        assert!(!draft.songs()[1].id.is_empty());
    }

    #[test]
    fn add_song_rejects_empty_fields() {
        let mut draft = Draft::new();

        assert!(!draft.add_song("", "Pink Floyd"));
        assert!(!draft.add_song("Echoes", ""));
        assert!(!draft.add_song("", ""));
        assert!(draft.is_empty());
    }

    #[test]
    fn add_song_permits_duplicates() {
        let draft = draft_with(&[("Echoes", "Pink Floyd"), ("Echoes", "Pink Floyd")]);

        assert_eq!(draft.len(), 2);
        assert_ne!(draft.songs()[0].id, draft.songs()[1].id);
    }

    #[test]
    fn rapid_adds_mint_distinct_increasing_ids() {
        let draft = draft_with(&[("a", "x"), ("b", "x"), ("c", "x"), ("d", "x")]);

        let ids: Vec<u64> = draft
            .songs()
            .iter()
            .map(|song| song.id.parse().unwrap())
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn delete_song_removes_exactly_one_and_keeps_order() {
        let mut draft = draft_with(&[("a", "x"), ("b", "x"), ("c", "x")]);
        let id = draft.songs()[1].id.clone();

        assert!(draft.delete_song(&id));

        let titles: Vec<&str> = draft.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn delete_song_ignores_unknown_ids() {
        let mut draft = draft_with(&[("a", "x")]);

        assert!(!draft.delete_song("no-such-id"));
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut draft = draft_with(&[("a", "x"), ("b", "x")]);

        draft.clear();

        assert!(draft.is_empty());
    }

    #[test]
    fn take_snapshot_drains_into_a_named_playlist() {
        let mut draft = draft_with(&[("a", "x"), ("b", "x")]);

        let playlist = draft.take_snapshot("Mix");

        assert_eq!(playlist.name, "Mix");
        assert_eq!(playlist.songs.len(), 2);
        assert!(draft.is_empty());
    }

    #[test]
    fn replace_adopts_loaded_ids_into_the_watermark() {
        let mut draft = Draft::new();
        let far_future = u64::MAX / 2;

        draft.replace(vec![Song {
            id: far_future.to_string(),
            title: "a".to_string(),
            artist: "x".to_string(),
        }]);
        assert!(draft.add_song("b", "x"));

        let minted: u64 = draft.songs()[1].id.parse().unwrap();
        assert!(minted > far_future);
    }
}
