//! Spanish Wordle: guess the five-letter word in five tries.

mod verdict;
pub mod terminal;

pub use verdict::{GuessRow, KeyboardState, LetterVerdict, evaluate};

use crate::error::{HubError, Result};
use crate::random::Picker;
use crate::stats::{SessionStats, StatsStore};
use crate::words::{self, WordEntry};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const WORD_LENGTH: usize = 5;
pub const MAX_GUESSES: usize = 5;
/// Letter outside A-Z that the alphabet supports.
pub const EXTRA_LETTER: char = 'Ñ';
/// Time the host spends flipping tiles before the guess takes effect.
pub const REVEAL_DELAY: Duration = Duration::from_millis(WORD_LENGTH as u64 * 300 + 200);
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

pub fn is_supported_letter(ch: char) -> bool
{
    ch.is_ascii_uppercase() || ch == EXTRA_LETTER
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome
{
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    Active,
    Revealing,
    Ended(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key
{
    Letter(char),
    Backspace,
    Enter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome
{
    Typed,
    Erased,
    /// The row was scored; the host should schedule [`WordleSession::finish_reveal`].
    Submitted(GuessRow),
    /// Enter with an incomplete row; the host shakes the row.
    Invalid,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejected
{
    #[error("guess must be {expected} letters, got {actual}")]
    WrongLength
    {
        expected: usize,
        actual: usize,
    },

    #[error("the board is not accepting guesses")]
    NotAccepting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState
{
    Empty,
    Tentative,
    Revealed(LetterVerdict),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile
{
    pub letter: Option<char>,
    pub state: TileState,
}

impl Tile
{
    const EMPTY: Tile = Tile {
        letter: None,
        state: TileState::Empty,
    };
}

#[derive(Debug)]
pub struct WordleSession<P, S>
{
    words: Vec<WordEntry>,
    target: WordEntry,
    guesses: Vec<GuessRow>,
    current: String,
    keyboard: KeyboardState,
    phase: Phase,
    picker: P,
    stats: S,
}

impl<P: Picker, S: StatsStore> WordleSession<P, S>
{
    pub fn new(picker: P, stats: S) -> Result<Self>
    {
        Self::with_words(words::SPANISH_WORDS, picker, stats)
    }

    /// Builds a session over `catalog`, keeping only entries of [`WORD_LENGTH`].
    pub fn with_words(catalog: &[WordEntry], mut picker: P, stats: S) -> Result<Self>
    {
        let words = words::words_of_length(catalog, WORD_LENGTH);
        let target = pick_target(&words, &mut picker)?;
        debug!(candidates = words.len(), "wordle session created");
        Ok(Self {
            words,
            target,
            guesses: Vec::new(),
            current: String::new(),
            keyboard: KeyboardState::default(),
            phase: Phase::Active,
            picker,
            stats,
        })
    }

    /// Starts over with a fresh target. Stats are kept.
    pub fn new_game(&mut self) -> Result<()>
    {
        self.target = pick_target(&self.words, &mut self.picker)?;
        self.guesses.clear();
        self.current.clear();
        self.keyboard.clear();
        self.phase = Phase::Active;
        debug!("wordle new game");
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome
    {
        if self.phase != Phase::Active {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Enter => {
                if self.current.chars().count() != WORD_LENGTH {
                    return KeyOutcome::Invalid;
                }
                let guess = self.current.clone();
                match self.submit_guess(&guess) {
                    Ok(row) => KeyOutcome::Submitted(row.clone()),
                    Err(_) => KeyOutcome::Invalid,
                }
            }
            Key::Backspace => match self.current.pop() {
                Some(_) => KeyOutcome::Erased,
                None => KeyOutcome::Ignored,
            },
            Key::Letter(ch) => {
                let Some(letter) = single_upper(ch) else {
                    return KeyOutcome::Ignored;
                };
                if !is_supported_letter(letter) || self.current.chars().count() >= WORD_LENGTH {
                    return KeyOutcome::Ignored;
                }
                self.current.push(letter);
                KeyOutcome::Typed
            }
        }
    }

    /// Scores `text` against the target and moves to [`Phase::Revealing`].
    pub fn submit_guess(&mut self, text: &str) -> std::result::Result<&GuessRow, GuessRejected>
    {
        if self.phase != Phase::Active {
            return Err(GuessRejected::NotAccepting);
        }
        let guess = text.to_uppercase();
        let actual = guess.chars().count();
        if actual != WORD_LENGTH {
            return Err(GuessRejected::WrongLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let row = GuessRow::score(&guess, self.target.word);
        self.update_keyboard(&row);
        debug!(guess = %guess, attempt = self.guesses.len() + 1, "guess submitted");
        self.guesses.push(row);
        self.current.clear();
        self.phase = Phase::Revealing;
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    pub fn update_keyboard(&mut self, row: &GuessRow)
    {
        self.keyboard.apply(row);
    }

    /// Resolves the last submitted row once the reveal delay has elapsed.
    pub fn finish_reveal(&mut self) -> Phase
    {
        if self.phase != Phase::Revealing {
            return self.phase;
        }

        let solved = self.guesses.last().is_some_and(GuessRow::is_solved);
        self.phase = if solved {
            self.stats.set(self.stats.get().record_win());
            Phase::Ended(Outcome::Won)
        } else if self.guesses.len() >= MAX_GUESSES {
            self.stats.set(self.stats.get().record_loss());
            Phase::Ended(Outcome::Lost)
        } else {
            Phase::Active
        };

        if let Phase::Ended(outcome) = self.phase {
            info!(?outcome, target = self.target.word, attempts = self.guesses.len(), "wordle ended");
        }
        self.phase
    }

    /// All [`MAX_GUESSES`] rows as the player sees them.
    pub fn grid(&self) -> Vec<Vec<Tile>>
    {
        let mut rows: Vec<Vec<Tile>> = Vec::with_capacity(MAX_GUESSES);
        for row in &self.guesses {
            rows.push(
                row.tiles()
                    .iter()
                    .map(|&(letter, verdict)| Tile {
                        letter: Some(letter),
                        state: TileState::Revealed(verdict),
                    })
                    .collect(),
            );
        }
        if rows.len() < MAX_GUESSES {
            let mut current = vec![Tile::EMPTY; WORD_LENGTH];
            for (tile, letter) in current.iter_mut().zip(self.current.chars()) {
                *tile = Tile {
                    letter: Some(letter),
                    state: TileState::Tentative,
                };
            }
            rows.push(current);
        }
        while rows.len() < MAX_GUESSES {
            rows.push(vec![Tile::EMPTY; WORD_LENGTH]);
        }
        rows
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome>
    {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn guesses(&self) -> &[GuessRow]
    {
        &self.guesses
    }

    pub fn current_guess(&self) -> &str
    {
        &self.current
    }

    pub fn keyboard(&self) -> &KeyboardState
    {
        &self.keyboard
    }

    pub fn stats(&self) -> SessionStats
    {
        self.stats.get()
    }

    pub fn target(&self) -> WordEntry
    {
        self.target
    }

    pub fn words(&self) -> &[WordEntry]
    {
        &self.words
    }
}

fn pick_target(words: &[WordEntry], picker: &mut impl Picker) -> Result<WordEntry>
{
    picker
        .pick(words)
        .copied()
        .ok_or(HubError::EmptyCatalog("wordle"))
}

fn single_upper(ch: char) -> Option<char>
{
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}
