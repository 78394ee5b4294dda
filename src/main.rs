//! Terminal runner (default binary).
//!
//! This is the presentation collaborator: it owns the cursor, key handling,
//! and status messages, and draws whatever `term::render_lines` produces.
//! The engine itself never touches the terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use dice_merge::core::SimpleRng;
use dice_merge::game::{Game, GameEvent};
use dice_merge::store::FileStore;
use dice_merge::term::render_lines;
use dice_merge::types::{BoostOutcome, BOARD_SIZE};

/// What the next key press means
enum Mode {
    Normal,
    /// Waiting for a digit choosing which level to clear
    PickClearLevel,
    /// Hammer armed: waiting for a cell selection
    Hammer,
}

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    queue!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
    out.flush()?;

    let result = run(&mut out);

    // Always try to restore terminal state.
    let _ = queue!(out, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
    result
}

fn run(out: &mut impl Write) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut rng = SimpleRng::new(seed);
    let mut game = Game::load_or_new(FileStore::new(FileStore::default_path()), &mut rng);

    let mut at = (0usize, 0usize);
    let mut mode = Mode::Normal;
    let mut status = String::from("Arrows move, Enter places, r rotates, q quits");

    loop {
        game.ensure_pending_pack(&mut rng)?;
        draw(
            out,
            &render_lines(game.session(), game.merge_total(), at, &status),
        )?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match mode {
            Mode::PickClearLevel => match key.code {
                KeyCode::Esc => {
                    mode = Mode::Normal;
                    status = "Clear-level cancelled".into();
                }
                KeyCode::Char(ch @ '1'..='6') => {
                    mode = Mode::Normal;
                    let level = ch as u8 - b'0';
                    status = match game.use_clear_level(level)? {
                        BoostOutcome::Applied => format!("Cleared every level-{level} die"),
                        BoostOutcome::Unavailable => shop_stub(),
                        BoostOutcome::Ignored => "Nothing to clear".into(),
                    };
                }
                _ => {}
            },
            Mode::Hammer => match key.code {
                KeyCode::Esc => {
                    game.cancel_hammer();
                    mode = Mode::Normal;
                    status = "Hammer cancelled".into();
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if game.hammer_strike(at.0, at.1)? {
                        mode = Mode::Normal;
                        status = "Die removed".into();
                    } else {
                        status = "Pick a cell with a die (Esc cancels)".into();
                    }
                }
                code => {
                    move_cursor(&mut at, code);
                }
            },
            Mode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if game.is_over() {
                        status = "Session over - press n for a new one".into();
                    } else {
                        let before = game.session().counters().placements;
                        match game.place_pack_at(at.0, at.1)? {
                            Some(GameEvent::SessionEnded {
                                final_score,
                                merge_total,
                            }) => {
                                status = format!(
                                    "No free cells left: {final_score} points banked, \
                                     {merge_total} lifetime. Press n for a new session"
                                );
                            }
                            None => {
                                status = if game.session().counters().placements > before {
                                    String::new()
                                } else {
                                    "Can't place there".into()
                                };
                            }
                        }
                    }
                }
                KeyCode::Char('r') => {
                    if !game.rotate_base()? {
                        status = "Nothing to rotate".into();
                    }
                }
                KeyCode::Char('u') => {
                    status = match game.use_undo()? {
                        BoostOutcome::Applied => "Last action undone".into(),
                        BoostOutcome::Unavailable => shop_stub(),
                        BoostOutcome::Ignored => "Nothing to undo".into(),
                    };
                }
                KeyCode::Char('c') => {
                    if game.session().boosts().clear_level == 0 {
                        status = shop_stub();
                    } else if !game.is_over() {
                        mode = Mode::PickClearLevel;
                        status = "Clear which level? 1-6 (Esc cancels)".into();
                    }
                }
                KeyCode::Char('h') => match game.arm_hammer() {
                    BoostOutcome::Applied => {
                        mode = Mode::Hammer;
                        status = "Hammer armed: pick a die, Enter removes it".into();
                    }
                    BoostOutcome::Unavailable => status = shop_stub(),
                    BoostOutcome::Ignored => {}
                },
                KeyCode::Char('n') => {
                    if game.is_over() {
                        game.start_new_session(&mut rng)?;
                        status = "New session".into();
                    }
                }
                KeyCode::Char('f') => {
                    let total = game.finish_and_bank(&mut rng)?;
                    status = format!("Score banked - {total} lifetime. New session started");
                }
                code => {
                    move_cursor(&mut at, code);
                }
            },
        }
    }
}

fn move_cursor(at: &mut (usize, usize), code: KeyCode) {
    match code {
        KeyCode::Up => at.0 = at.0.saturating_sub(1),
        KeyCode::Down => at.0 = (at.0 + 1).min(BOARD_SIZE - 1),
        KeyCode::Left => at.1 = at.1.saturating_sub(1),
        KeyCode::Right => at.1 = (at.1 + 1).min(BOARD_SIZE - 1),
        _ => {}
    }
}

/// The boost purchase flow is out of scope; surface it as a message
fn shop_stub() -> String {
    "No charges left - the boost shop is not part of this build".into()
}

fn draw(out: &mut impl Write, lines: &[String]) -> Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in lines {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()?;
    Ok(())
}
