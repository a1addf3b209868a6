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

//! Per-event application logic.
//!
//! These functions are the only place the draft and the saved store are
//! mutated. Every confirmed saved-store mutation dispatches exactly one
//! persist task; rejected operations dispatch none.

use crate::{App, StatusMessage, model::Playlist, tasks::AppTask, util::format::count_label};

pub(super) fn handle_playlists_loaded(app: &mut App, playlists: Vec<Playlist>) {
    if !playlists.is_empty() {
        app.status = Some(StatusMessage::info(format!(
            "Loaded {}",
            count_label(playlists.len(), "playlist")
        )));
    }

    app.saved.set_playlists(playlists);
    app.saved_view.clamp_selection(app.saved.len());
}

pub(super) fn handle_playlists_persisted(app: &mut App, count: usize) {
    app.status = Some(StatusMessage::info(format!(
        "Stored {}",
        count_label(count, "playlist")
    )));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(StatusMessage::error(message));
}

pub(super) fn handle_add_song(app: &mut App) {
    let title = app.song_form.title_value();
    let artist = app.song_form.artist_value();

    // An empty field means the add is silently ignored, and the typed text
    // stays in place for the user to finish.
    if app.draft.add_song(&title, &artist) {
        log::debug!("Added song {title} by {artist} to the draft");
        app.song_form.reset();
        app.draft_view.ensure_selection(app.draft.len());
    }
}

pub(super) fn handle_clear_draft(app: &mut App) {
    app.draft.clear();
    app.draft_view.clamp_selection(0);
}

pub(super) fn handle_delete_draft_song(app: &mut App, index: usize) {
    let Some(id) = app.draft.songs().get(index).map(|song| song.id.clone()) else {
        return;
    };

    app.draft.delete_song(&id);
    app.draft_view.clamp_selection(app.draft.len());
}

pub(super) fn handle_save_playlist(app: &mut App) {
    let name = app.save_bar.value();

    if name.is_empty() {
        app.alert = Some("Please enter a playlist name.".to_string());
        return;
    }

    let snapshot = app.draft.take_snapshot(&name);
    log::debug!(
        "Saved the draft as {name} with {}",
        count_label(snapshot.songs.len(), "song")
    );
    app.saved.add(snapshot);
    app.save_bar.reset();
    app.draft_view.clamp_selection(0);
    app.saved_view.ensure_selection(app.saved.len());

    persist(app);
}

pub(super) fn handle_load_saved(app: &mut App, index: usize) {
    let Some(playlist) = app.saved.take_at(index) else {
        return;
    };

    log::debug!("Loaded playlist {} back into the draft", playlist.name);
    app.draft.replace(playlist.songs);
    app.draft_view.ensure_selection(app.draft.len());
    app.saved_view.clamp_selection(app.saved.len());

    persist(app);
}

pub(super) fn handle_delete_saved(app: &mut App, index: usize) {
    let Some(name) = app
        .saved
        .playlists()
        .get(index)
        .map(|playlist| playlist.name.clone())
    else {
        return;
    };

    app.saved.delete_named(&name);
    app.saved_view.clamp_selection(app.saved.len());

    persist(app);
}

/// Hands the current saved store to the worker. The UI does not wait for
/// the write; the outcome comes back later as an application event.
fn persist(app: &mut App) {
    let snapshot = app.saved.snapshot();

    if app.task_tx.send(AppTask::PersistPlaylists(snapshot)).is_err() {
        handle_error(
            app,
            "Storage worker is gone; changes are kept in memory only".to_string(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use tui_input::Input;

    use super::*;
    use crate::{
        App,
        config::AppConfig,
        model::{Playlist, Song},
        tasks::AppTask,
    };

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn song(id: &str, title: &str) -> Song {
        Song {
            id: id.to_string(),
            title: title.to_string(),
            artist: "x".to_string(),
        }
    }

    fn persisted_playlists(task_rx: &Receiver<AppTask>) -> Vec<Vec<Playlist>> {
        let mut dispatched = Vec::new();
        while let Ok(task) = task_rx.try_recv() {
            match task {
                AppTask::PersistPlaylists(playlists) => dispatched.push(playlists),
                other => panic!("unexpected task {other:?}"),
            }
        }
        dispatched
    }

    #[test]
    fn add_song_fills_the_draft_and_clears_the_form() {
        let (mut app, _task_rx) = test_app();
        app.song_form.title = Input::new("Echoes".to_string());
        app.song_form.artist = Input::new("Pink Floyd".to_string());

        handle_add_song(&mut app);

        assert_eq!(app.draft.len(), 1);
        assert_eq!(app.song_form.title_value(), "");
        assert_eq!(app.song_form.artist_value(), "");
    }

    #[test]
    fn add_song_with_an_empty_field_changes_nothing() {
        let (mut app, _task_rx) = test_app();
        app.song_form.title = Input::new("Echoes".to_string());

        handle_add_song(&mut app);

        assert!(app.draft.is_empty());
        // The typed title stays for the user to finish the pair.
        assert_eq!(app.song_form.title_value(), "Echoes");
    }

    #[test]
    fn save_with_an_empty_name_raises_the_alert_and_persists_nothing() {
        let (mut app, task_rx) = test_app();
        app.song_form.title = Input::new("Echoes".to_string());
        app.song_form.artist = Input::new("Pink Floyd".to_string());
        handle_add_song(&mut app);

        handle_save_playlist(&mut app);

        assert!(app.alert.is_some());
        assert_eq!(app.saved.len(), 0);
        assert_eq!(app.draft.len(), 1);
        assert!(persisted_playlists(&task_rx).is_empty());
    }

    #[test]
    fn save_snapshots_the_draft_and_persists_exactly_once() {
        let (mut app, task_rx) = test_app();
        app.song_form.title = Input::new("Echoes".to_string());
        app.song_form.artist = Input::new("Pink Floyd".to_string());
        handle_add_song(&mut app);
        app.save_bar.input = Input::new("Mix".to_string());

        handle_save_playlist(&mut app);

        assert!(app.alert.is_none());
        assert!(app.draft.is_empty());
        assert_eq!(app.save_bar.value(), "");
        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved.playlists()[0].name, "Mix");
        assert_eq!(app.saved.playlists()[0].songs[0].title, "Echoes");

        let dispatched = persisted_playlists(&task_rx);
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].len(), 1);
    }

    #[test]
    fn load_moves_the_playlist_into_the_draft_and_out_of_the_store() {
        let (mut app, task_rx) = test_app();
        app.saved.set_playlists(vec![
            Playlist {
                name: "P".to_string(),
                songs: vec![song("1", "a")],
            },
            Playlist {
                name: "Q".to_string(),
                songs: vec![],
            },
            Playlist {
                name: "P".to_string(),
                songs: vec![song("2", "b")],
            },
        ]);

        handle_load_saved(&mut app, 0);

        assert_eq!(app.draft.len(), 1);
        assert_eq!(app.draft.songs()[0].title, "a");
        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved.playlists()[0].name, "Q");

        let dispatched = persisted_playlists(&task_rx);
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].len(), 1);
    }

    #[test]
    fn delete_saved_removes_every_playlist_with_that_name() {
        let (mut app, task_rx) = test_app();
        app.saved.set_playlists(vec![
            Playlist {
                name: "P".to_string(),
                songs: vec![],
            },
            Playlist {
                name: "P".to_string(),
                songs: vec![],
            },
        ]);

        handle_delete_saved(&mut app, 1);

        assert_eq!(app.saved.len(), 0);
        assert_eq!(persisted_playlists(&task_rx).len(), 1);
    }

    #[test]
    fn delete_draft_song_goes_through_the_song_id() {
        let (mut app, _task_rx) = test_app();
        app.draft.replace(vec![song("1", "a"), song("2", "b"), song("3", "c")]);

        handle_delete_draft_song(&mut app, 1);

        let titles: Vec<&str> = app.draft.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn clear_draft_leaves_the_saved_store_alone() {
        let (mut app, task_rx) = test_app();
        app.draft.replace(vec![song("1", "a")]);
        app.saved.add(Playlist {
            name: "P".to_string(),
            songs: vec![],
        });

        handle_clear_draft(&mut app);

        assert!(app.draft.is_empty());
        assert_eq!(app.saved.len(), 1);
        assert!(persisted_playlists(&task_rx).is_empty());
    }
}
