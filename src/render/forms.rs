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

//! Render the text entry fields.
//!
//! This module draws the three managed inputs, the current text, the cursor
//! and so on. The cursor is only placed while the field has focus, since the
//! terminal has a single hardware cursor.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use crate::{App, events::Focus, theme::Theme};

pub(super) fn draw_song_form(f: &mut Frame, area: Rect, app: &App) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_input_field(
        f,
        fields[0],
        &app.song_form.title,
        " Song ",
        app.focus == Focus::SongTitle,
        &app.theme,
    );
    draw_input_field(
        f,
        fields[1],
        &app.song_form.artist,
        " Artist ",
        app.focus == Focus::SongArtist,
        &app.theme,
    );
}

pub(super) fn draw_save_bar(f: &mut Frame, area: Rect, app: &App) {
    draw_input_field(
        f,
        area,
        &app.save_bar.input,
        " Playlist Name ",
        app.focus == Focus::PlaylistName,
        &app.theme,
    );
}

fn draw_input_field(
    f: &mut Frame,
    area: Rect,
    input: &Input,
    title: &str,
    focused: bool,
    theme: &Theme,
) {
    let border_colour = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep the tail of long values visible while typing.
    let scroll = input.visual_scroll(inner.width.max(1) as usize);
    f.render_widget(
        Paragraph::new(input.value()).scroll((0, scroll as u16)),
        inner,
    );

    if focused {
        let cursor_x = inner.x + input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((cursor_x, inner.y));
    }
}
