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

//! Modal alert popup.
//!
//! A centered box drawn over everything else. While it is shown, key
//! handling swallows all input except dismissal, so the underlying screen
//! cannot change behind it.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::theme::Theme;

pub(super) fn draw_alert(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let [popup] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(50)])
        .flex(Flex::Center)
        .areas(popup);

    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(Style::default().fg(theme.error_colour))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press Enter to dismiss"),
    ])
    .centered()
    .block(block);

    f.render_widget(paragraph, popup);
}
