//! Terminal presentation - maps the session into plain text
//!
//! This module is pure (no I/O); only the binary touches the terminal.

pub mod game_view;

pub use game_view::render_lines;
