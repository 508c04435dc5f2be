use super::{
    Key, KeyOutcome, KeyboardState, LetterVerdict, Outcome, Phase, REVEAL_DELAY, SHAKE_DURATION,
    Tile, TileState, WordleSession,
};
use crate::config::HubConfig;
use crate::error::Result;
use crate::random::Picker;
use crate::stats::{MemoryStatsStore, StatsStore};
use crate::terminal::{self, Rgb, TICK, TerminalGuard, paint_bg};
use crate::timer::{self, Deadline};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io::Stdout;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(33);
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

const GREEN: Rgb = Rgb::new(0, 150, 70);
const YELLOW: Rgb = Rgb::new(180, 130, 0);
const GREY: Rgb = Rgb::new(60, 60, 60);
const PENDING: Rgb = Rgb::new(40, 40, 40);
const UNUSED: Rgb = Rgb::new(110, 110, 120);

enum Control
{
    Continue,
    NewGame,
    Quit,
}

pub fn run(config: &HubConfig) -> Result<()>
{
    let mut term = TerminalGuard::enter()?;
    let mut session = WordleSession::new(config.picker(), MemoryStatsStore::new())?;
    let mut reveal: Option<Deadline<()>> = None;
    let mut shake: Option<Deadline<()>> = None;
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        if timer::fire(&mut reveal, now).is_some() {
            session.finish_reveal();
        }
        timer::fire(&mut shake, now);

        match handle_input(&mut session, &mut reveal, &mut shake)? {
            Control::Quit => break,
            Control::NewGame => {
                session.new_game()?;
                reveal = None;
                shake = None;
            }
            Control::Continue => {}
        }

        if last_tick.elapsed() >= FRAME {
            draw_ui(term.stdout(), &session, shake.is_some())?;
            last_tick = Instant::now();
        }

        std::thread::sleep(TICK);
    }

    Ok(())
}

fn handle_input<P: Picker, S: StatsStore>(
    session: &mut WordleSession<P, S>,
    reveal: &mut Option<Deadline<()>>,
    shake: &mut Option<Deadline<()>>,
) -> Result<Control>
{
    while event::poll(Duration::from_millis(0))? {
        let Event::Key(KeyEvent { code, modifiers, .. }) = event::read()? else {
            continue;
        };
        let key = match code {
            KeyCode::Esc => return Ok(Control::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Control::Quit)
            }
            KeyCode::Tab => return Ok(Control::NewGame),
            KeyCode::Enter if session.outcome().is_some() => return Ok(Control::NewGame),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(ch) => Key::Letter(ch),
            _ => continue,
        };

        let now = Instant::now();
        match session.handle_key(key) {
            KeyOutcome::Submitted(_) => *reveal = Some(Deadline::after(now, REVEAL_DELAY, ())),
            KeyOutcome::Invalid => *shake = Some(Deadline::after(now, SHAKE_DURATION, ())),
            KeyOutcome::Typed | KeyOutcome::Erased | KeyOutcome::Ignored => {}
        }
    }

    Ok(Control::Continue)
}

fn draw_ui<P: Picker, S: StatsStore>(
    stdout: &mut Stdout,
    session: &WordleSession<P, S>,
    shaking: bool,
) -> Result<()>
{
    let stats = session.stats();
    let mut lines = Vec::new();
    lines.push("Spanish Hub - Wordle".to_string());
    lines.push(format!(
        "Streak: {}  Wins: {}  Played: {}  Win rate: {}%",
        stats.streak,
        stats.wins,
        stats.played,
        stats.win_rate()
    ));
    lines.push(String::new());

    let current_row = session.guesses().len();
    for (idx, row) in session.grid().iter().enumerate() {
        let mut line = format!("  {}", render_row(row));
        if idx == current_row && shaking {
            line.push_str(" <  Not enough letters");
        }
        lines.push(line);
    }

    lines.push(String::new());
    for row in render_keyboard(session.keyboard()) {
        lines.push(row);
    }
    lines.push(String::new());

    match session.phase() {
        Phase::Active => {
            lines.push("Type a word, Enter submits, Backspace edits.".to_string());
            lines.push("Tab starts a new word. Esc quits.".to_string());
        }
        Phase::Revealing => {
            lines.push("Checking...".to_string());
        }
        Phase::Ended(outcome) => {
            let target = session.target();
            lines.push(match outcome {
                Outcome::Won => format!("¡Ganaste! Solved in {} tries.", session.guesses().len()),
                Outcome::Lost => "¡Qué pena! Out of tries.".to_string(),
            });
            lines.push(format!("The word was {} ({}).", target.word, target.translation));
            lines.push("Enter or Tab plays again. Esc quits.".to_string());
        }
    }

    terminal::present(stdout, &lines)?;
    Ok(())
}

fn render_row(row: &[Tile]) -> String
{
    let mut line = String::new();
    for tile in row {
        let color = match tile.state {
            TileState::Revealed(verdict) => verdict_color(verdict),
            TileState::Tentative => PENDING,
            TileState::Empty => Rgb::new(25, 25, 25),
        };
        let letter = tile.letter.unwrap_or('_');
        line.push_str(&paint_bg(&format!(" {letter} "), color));
        line.push(' ');
    }
    line
}

fn render_keyboard(keyboard: &KeyboardState) -> Vec<String>
{
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut line = " ".repeat(indent * 2 + 2);
            for letter in row.chars() {
                let color = keyboard.get(letter).map_or(UNUSED, verdict_color);
                line.push_str(&paint_bg(&format!(" {letter} "), color));
            }
            line
        })
        .collect()
}

fn verdict_color(verdict: LetterVerdict) -> Rgb
{
    match verdict {
        LetterVerdict::Correct => GREEN,
        LetterVerdict::Present => YELLOW,
        LetterVerdict::Absent => GREY,
    }
}
