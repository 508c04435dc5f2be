use super::fall::GROUND;
use super::{AnswerOutcome, FLASH_DURATION, FallingChallenge, Phase, RunnerSession, START_LIVES};
use crate::config::HubConfig;
use crate::error::Result;
use crate::random::Picker;
use crate::terminal::{self, Rgb, TICK, TerminalGuard, paint_fg};
use crate::timer::{self, Deadline};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io::Stdout;
use std::time::{Duration, Instant};

const LANES: usize = 3;
const FRAME: Duration = Duration::from_millis(33);

const GREEN: Rgb = Rgb::new(0, 200, 90);
const RED: Rgb = Rgb::new(230, 40, 40);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const CYAN: Rgb = Rgb::new(80, 200, 255);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Flash
{
    Correct,
    Wrong,
}

#[derive(Clone, Copy)]
struct Cell
{
    ch: char,
    color: Option<Rgb>,
}

enum Control
{
    Continue,
    Quit,
}

pub fn run(config: &HubConfig) -> Result<()>
{
    let mut term = TerminalGuard::enter()?;
    let mut session = RunnerSession::new(config.picker())?;

    loop {
        draw_menu(term.stdout(), &session)?;
        if !wait_for_start()? {
            break;
        }
        session.start();
        if let Control::Quit = play_round(term.stdout(), &mut session)? {
            break;
        }
    }

    Ok(())
}

/// Drives one round; returns as soon as the session leaves `Playing`.
fn play_round<P: Picker>(stdout: &mut Stdout, session: &mut RunnerSession<P>) -> Result<Control>
{
    let mut buffer = String::new();
    let mut flash: Option<Deadline<Flash>> = None;
    let mut last_frame = Instant::now();
    let mut last_draw = Instant::now();

    while session.phase() == Phase::Playing {
        if let Control::Quit = handle_input(session, &mut buffer, &mut flash)? {
            return Ok(Control::Quit);
        }

        let now = Instant::now();
        let dt_ms = now.saturating_duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        session.tick(dt_ms);
        timer::fire(&mut flash, now);

        if last_draw.elapsed() >= FRAME {
            draw_round(stdout, session, &buffer, flash.map(|f| f.payload()))?;
            last_draw = Instant::now();
        }

        std::thread::sleep(TICK);
    }

    Ok(Control::Continue)
}

fn handle_input<P: Picker>(
    session: &mut RunnerSession<P>,
    buffer: &mut String,
    flash: &mut Option<Deadline<Flash>>,
) -> Result<Control>
{
    while event::poll(Duration::from_millis(0))? {
        let Event::Key(KeyEvent { code, modifiers, .. }) = event::read()? else {
            continue;
        };
        match code {
            KeyCode::Esc => return Ok(Control::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Control::Quit)
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let signal = match session.submit_answer(buffer) {
                    AnswerOutcome::Correct { .. } => Some(Flash::Correct),
                    AnswerOutcome::Wrong => Some(Flash::Wrong),
                    AnswerOutcome::Ignored => None,
                };
                if let Some(signal) = signal {
                    *flash = Some(Deadline::after(Instant::now(), FLASH_DURATION, signal));
                }
                buffer.clear();
            }
            KeyCode::Char(ch) if !ch.is_control() => buffer.push(ch),
            _ => {}
        }
    }

    Ok(Control::Continue)
}

/// Returns `false` when the player asks to leave.
fn wait_for_start() -> Result<bool>
{
    loop {
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(KeyEvent { code, modifiers, .. }) = event::read()? {
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(true),
                KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(false)
                }
                _ => {}
            }
        }
    }
}

fn draw_menu<P: Picker>(stdout: &mut Stdout, session: &RunnerSession<P>) -> Result<()>
{
    let mut lines = Vec::new();
    lines.push("Spanish Hub - Verb Runner".to_string());
    lines.push(String::new());
    match session.phase() {
        Phase::Over => {
            lines.push("¡Se acabó! Game over".to_string());
            lines.push(String::new());
            lines.push(format!("Score: {}", session.score()));
            lines.push(format!("Best:  {}", session.high_score()));
            lines.push(String::new());
            lines.push("Press ENTER to try again, ESC to leave.".to_string());
        }
        Phase::Idle | Phase::Playing => {
            lines.push("Conjugate the falling verbs before they hit the ground.".to_string());
            lines.push(format!(
                "{} lives. Consecutive hits build a combo worth 5 extra points each.",
                START_LIVES
            ));
            if session.high_score() > 0 {
                lines.push(format!("High score: {}", session.high_score()));
            }
            lines.push(String::new());
            lines.push("Press ENTER to start running, ESC to leave.".to_string());
        }
    }
    terminal::present(stdout, &lines)?;
    Ok(())
}

fn draw_round<P: Picker>(
    stdout: &mut Stdout,
    session: &RunnerSession<P>,
    buffer: &str,
    flash: Option<Flash>,
) -> Result<()>
{
    let (width, height) = terminal::size();
    let field_width = width.saturating_sub(2).max(LANES * 12);
    let field_height = height.saturating_sub(8).clamp(8, 30);

    let mut lines = Vec::new();
    lines.push("Spanish Hub - Verb Runner".to_string());
    let hearts: String = (0..START_LIVES)
        .map(|i| if i < session.lives() { '♥' } else { '♡' })
        .collect();
    let combo = if session.combo() > 1 {
        format!("  combo x{}", session.combo())
    } else {
        String::new()
    };
    lines.push(format!(
        "{}  Score: {}{}",
        paint_fg(&hearts, RED),
        session.score(),
        paint_fg(&combo, GOLD)
    ));

    let mut field = vec![
        vec![
            Cell {
                ch: ' ',
                color: None,
            };
            field_width
        ];
        field_height
    ];
    let lane_width = field_width / LANES;
    for falling in session.active() {
        place(&mut field, falling, lane_width, buffer);
    }
    for row in &field {
        lines.push(render_row(row));
    }

    let ground = "=".repeat(field_width);
    lines.push(match flash {
        Some(Flash::Correct) => paint_fg(&ground, GREEN),
        Some(Flash::Wrong) => paint_fg(&ground, RED),
        None => ground,
    });
    lines.push(format!("> {}", buffer));
    lines.push("Type the conjugation, ENTER submits, ESC quits.".to_string());

    terminal::present(stdout, &lines)?;
    Ok(())
}

fn place(field: &mut [Vec<Cell>], falling: &FallingChallenge, lane_width: usize, buffer: &str)
{
    let height = field.len();
    if height == 0 || lane_width == 0 {
        return;
    }
    let progress = (falling.position / GROUND).clamp(0.0, 1.0);
    let row = ((height as f64 - 1.0) * progress).floor() as usize;
    let lane = (falling.id as usize) % LANES;
    let column = lane * lane_width;

    let challenge = falling.challenge;
    let label = format!(
        "{} ({}, {}) {}",
        challenge.base_form, challenge.pronoun, challenge.tense, challenge.translation
    );
    let typed = buffer.trim().to_lowercase();
    let on_track = !typed.is_empty()
        && challenge.expected_answer.to_lowercase().starts_with(&typed);
    let color = if on_track { Some(CYAN) } else { None };

    let cells = &mut field[row];
    for (offset, ch) in label.chars().take(lane_width.saturating_sub(1)).enumerate() {
        if let Some(cell) = cells.get_mut(column + offset) {
            *cell = Cell { ch, color };
        }
    }
}

fn render_row(row: &[Cell]) -> String
{
    let mut line = String::with_capacity(row.len() + 16);
    let mut active: Option<Rgb> = None;
    for cell in row {
        if cell.color != active {
            match cell.color {
                Some(color) => line.push_str(&format!(
                    "\x1b[38;2;{};{};{}m",
                    color.r, color.g, color.b
                )),
                None => line.push_str("\x1b[0m"),
            }
            active = cell.color;
        }
        line.push(cell.ch);
    }
    if active.is_some() {
        line.push_str("\x1b[0m");
    }
    line
}
