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

//! UI rendering logic for the draft list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::DraftView, model::Song, render::icons::ICON_NOTE, theme::Theme,
    util::format::count_label,
};

impl DraftView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        songs: &[Song],
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
            .title(" Draft ")
            .border_style(Style::default().fg(border_colour));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));
        let header = Paragraph::new(count_label(songs.len(), "song")).block(header_block);
        f.render_widget(header, chunks[0]);

        let rows = songs.iter().map(|song| {
            Row::new(vec![
                Cell::from(ICON_NOTE),
                Cell::from(
                    Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(song.artist.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(55),
                Constraint::Percentage(45),
            ],
        )
        .header(
            Row::new(vec![Cell::from(""), Cell::from("Title"), Cell::from("Artist")])
                .style(
                    Style::default()
                        .fg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
                .bottom_margin(1),
        )
        .row_highlight_style(if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().fg(Color::White)
        });

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}
