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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into widgets using the `ratatui`
//! framework. It is responsible for layout management, widget styling, and
//! terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The entry point is the [`draw`] function, called after every processed
//! event. The single screen is split into a title line, the song entry form,
//! the save bar, the two lists, and a status footer; the modal alert, when
//! present, is drawn last so it sits on top.

mod alert;
mod forms;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::{App, events::Focus};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: title, song form, save bar, lists, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_title(f, outer[0], app);
    forms::draw_song_form(f, outer[1], app);
    forms::draw_save_bar(f, outer[2], app);

    // Main layout: draft on the left, saved playlists on the right
    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(outer[3]);

    app.draft_view.draw(
        f,
        lists[0],
        app.draft.songs(),
        app.focus == Focus::Draft,
        &app.theme,
    );
    app.saved_view.draw(
        f,
        lists[1],
        app.saved.playlists(),
        app.focus == Focus::Saved,
        &app.theme,
    );

    draw_status(f, outer[4], app);

    if let Some(message) = &app.alert {
        alert::draw_alert(f, area, message, &app.theme);
    }
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new("Mixtape")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(title, area);
}

/// The footer shows the latest persistence outcome when there is one, and
/// contextual key hints otherwise.
fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (text, style) = match &app.status {
        Some(status) if status.is_error => (
            status.text.clone(),
            Style::default().fg(app.theme.error_colour),
        ),
        Some(status) => (
            status.text.clone(),
            Style::default().fg(app.theme.border_colour),
        ),
        None => (
            hint_line(app.focus).to_string(),
            Style::default().fg(app.theme.border_colour),
        ),
    };

    f.render_widget(Paragraph::new(text).style(style), container[0]);
}

fn hint_line(focus: Focus) -> &'static str {
    match focus {
        Focus::SongTitle | Focus::SongArtist => {
            "Enter adds the song | Tab moves focus | Ctrl+C quits"
        }
        Focus::PlaylistName => "Enter saves the draft under this name | Tab moves focus",
        Focus::Draft => "j/k move | d deletes | c clears the draft | Tab moves focus | q quits",
        Focus::Saved => "j/k move | Enter loads | d deletes | Tab moves focus | q quits",
    }
}
