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

//! Terminal environment and styling utilities.
//!
//! Background color control goes through OSC (Operating System Command)
//! escape sequences rather than ratatui styling, because only the emulator
//! itself can repaint the window area outside the cell grid.
//!
//! # Compatibility
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// Non-RGB colors are ignored; there is no portable hex form for palette
/// indices. Flushes `stdout` immediately so the change applies without
/// delay.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Color::Rgb(r, g, b) = colour {
        print!("\x1b]11;#{r:02x}{g:02x}{b:02x}\x07");
        io::stdout().flush().unwrap();
    }
}

/// Resets the terminal background to its default color via OSC 111.
///
/// Called during application cleanup to leave the user's terminal as it was
/// found.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().unwrap();
}
