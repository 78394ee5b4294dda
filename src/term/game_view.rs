//! GameView: renders a `GameSession` into terminal lines.
//!
//! Pure function over the session so it can be unit-tested; the runner only
//! prints what this returns.

use crate::core::pack::Pack;
use crate::core::session::GameSession;
use crate::types::{Coord, Orientation, BOARD_SIZE, CHALLENGE_CHECKS};

fn die_char(level: u8) -> char {
    if level == 0 {
        '.'
    } else {
        char::from(b'0' + level)
    }
}

fn pack_line(session: &GameSession) -> String {
    match session.pending_pack() {
        None => "Pack: none - no free cells".to_string(),
        Some(Pack::Single { level }) => format!("Pack: [{level}]"),
        Some(Pack::Pair { level, orientation }) => {
            let dir = match orientation {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            };
            format!("Pack: [{level}][{level}] {dir} (r to rotate)")
        }
    }
}

fn challenge_line(session: &GameSession) -> String {
    let challenge = session.challenge();
    let mut marks = String::new();
    for i in 0..CHALLENGE_CHECKS {
        marks.push(if i < challenge.checks { '#' } else { '-' });
    }
    let done = if session.challenge_done() { " done!" } else { "" };
    format!(
        "Challenge: {} ({}/{}) [{marks}]{done}",
        challenge.key.describe(),
        challenge.progress,
        challenge.target,
    )
}

/// Render the whole play screen as lines of text
pub fn render_lines(
    session: &GameSession,
    merge_total: u64,
    cursor: Coord,
    status: &str,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 8);

    lines.push(format!(
        "Score {:<6} Bank {}",
        session.score(),
        merge_total
    ));
    lines.push(challenge_line(session));
    lines.push(String::new());

    for row in 0..BOARD_SIZE {
        let mut line = String::with_capacity(BOARD_SIZE * 3);
        for col in 0..BOARD_SIZE {
            let glyph = die_char(session.board().rows()[row][col]);
            if (row, col) == cursor {
                line.push('[');
                line.push(glyph);
                line.push(']');
            } else {
                line.push(' ');
                line.push(glyph);
                line.push(' ');
            }
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(pack_line(session));
    let boosts = session.boosts();
    lines.push(format!(
        "Boosts: [u]ndo x{}  [c]lear x{}  [h]ammer x{}",
        boosts.undo, boosts.clear_level, boosts.hammer
    ));
    if !status.is_empty() {
        lines.push(status.to_string());
    }
    lines
}
