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

//! Saved playlist store.
//!
//! This module provides state for the collection of named playlists, the
//! in-memory mirror of what the persistence layer keeps on disk.

use crate::model::Playlist;

#[derive(Default)]
pub(crate) struct SavedPlaylists {
    playlists: Vec<Playlist>,
}

impl SavedPlaylists {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Adopts the collection produced by the persistence layer at startup.
    pub(crate) fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
    }

    pub(crate) fn add(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Takes the playlist at the given position out of the store.
    ///
    /// Loading is a move, not a copy: every playlist sharing the name leaves
    /// the store along with the taken one.
    pub(crate) fn take_at(&mut self, index: usize) -> Option<Playlist> {
        if index >= self.playlists.len() {
            return None;
        }

        let taken = self.playlists.remove(index);
        self.playlists.retain(|playlist| playlist.name != taken.name);

        Some(taken)
    }

    /// Removes every playlist with the given name; returns how many went.
    pub(crate) fn delete_named(&mut self, name: &str) -> usize {
        let before = self.playlists.len();
        self.playlists.retain(|playlist| playlist.name != name);
        before - self.playlists.len()
    }

    /// Clones the current contents for handing to the persistence task.
    pub(crate) fn snapshot(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;

    fn playlist(name: &str, titles: &[&str]) -> Playlist {
        let songs = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Song {
                id: i.to_string(),
                title: title.to_string(),
                artist: "x".to_string(),
            })
            .collect();
        Playlist {
            name: name.to_string(),
            songs,
        }
    }

    #[test]
    fn add_appends_in_order() {
        let mut saved = SavedPlaylists::new();
        saved.add(playlist("First", &[]));
        saved.add(playlist("Second", &[]));

        let names: Vec<&str> = saved.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn take_at_removes_every_playlist_with_the_same_name() {
        let mut saved = SavedPlaylists::new();
        saved.set_playlists(vec![
            playlist("P", &["a"]),
            playlist("Q", &["b"]),
            playlist("P", &["c"]),
        ]);

        let taken = saved.take_at(0).unwrap();

        assert_eq!(taken.songs[0].title, "a");
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.playlists()[0].name, "Q");
    }

    #[test]
    fn take_at_out_of_range_is_a_no_op() {
        let mut saved = SavedPlaylists::new();
        saved.add(playlist("P", &[]));

        assert!(saved.take_at(5).is_none());
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn delete_named_removes_all_matches() {
        let mut saved = SavedPlaylists::new();
        saved.set_playlists(vec![
            playlist("P", &[]),
            playlist("Q", &[]),
            playlist("P", &[]),
        ]);

        assert_eq!(saved.delete_named("P"), 2);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.playlists()[0].name, "Q");
    }

    #[test]
    fn delete_named_with_unknown_name_removes_nothing() {
        let mut saved = SavedPlaylists::new();
        saved.add(playlist("P", &[]));

        assert_eq!(saved.delete_named("missing"), 0);
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let mut saved = SavedPlaylists::new();
        saved.add(playlist("P", &["a"]));

        let snapshot = saved.snapshot();
        saved.delete_named("P");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(saved.len(), 0);
    }
}
