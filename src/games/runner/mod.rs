//! Verb Runner: conjugate the falling verbs before they hit the ground.

pub mod fall;
pub mod spawn;
pub mod terminal;

pub use fall::{FallReport, FallingChallenge};
pub use spawn::SpawnScheduler;

use crate::error::{HubError, Result};
use crate::random::Picker;
use crate::words::{Challenge, VERB_CHALLENGES};
use std::time::Duration;
use tracing::{debug, info};

pub const START_LIVES: u8 = 3;
pub const BASE_POINTS: u32 = 10;
pub const COMBO_BONUS: u32 = 5;
pub const FLASH_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    Idle,
    Playing,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome
{
    Correct
    {
        points: u32,
    },
    Wrong,
    /// Blank input or no round in progress.
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport
{
    pub spawned: Option<u64>,
    pub lives_lost: u32,
    pub game_over: bool,
}

#[derive(Debug)]
pub struct RunnerSession<P>
{
    catalog: Vec<Challenge>,
    phase: Phase,
    score: u32,
    lives: u8,
    combo: u32,
    high_score: u32,
    active: Vec<FallingChallenge>,
    scheduler: SpawnScheduler,
    picker: P,
}

impl<P: Picker> RunnerSession<P>
{
    pub fn new(picker: P) -> Result<Self>
    {
        Self::with_challenges(VERB_CHALLENGES, picker)
    }

    pub fn with_challenges(catalog: &[Challenge], picker: P) -> Result<Self>
    {
        if catalog.is_empty() {
            return Err(HubError::EmptyCatalog("verb runner"));
        }
        Ok(Self {
            catalog: catalog.to_vec(),
            phase: Phase::Idle,
            score: 0,
            lives: START_LIVES,
            combo: 0,
            high_score: 0,
            active: Vec::new(),
            scheduler: SpawnScheduler::default(),
            picker,
        })
    }

    /// Begins a fresh round. The high score survives.
    pub fn start(&mut self)
    {
        if self.phase == Phase::Playing {
            return;
        }
        self.phase = Phase::Playing;
        self.score = 0;
        self.lives = START_LIVES;
        self.combo = 0;
        self.active.clear();
        self.scheduler.reset();
        debug!(high_score = self.high_score, "runner started");
    }

    /// Advances the round by `dt_ms` of measured frame time.
    pub fn tick(&mut self, dt_ms: f64) -> TickReport
    {
        let mut report = TickReport::default();
        if self.phase != Phase::Playing {
            return report;
        }

        if let Some(spawned) =
            self.scheduler
                .tick(dt_ms, self.score, &self.catalog, &mut self.picker)
        {
            debug!(
                id = spawned.id,
                verb = spawned.challenge.base_form,
                fall_rate = spawned.fall_rate,
                "challenge spawned"
            );
            report.spawned = Some(spawned.id);
            self.active.push(spawned);
        }

        let fall = fall::advance(std::mem::take(&mut self.active), dt_ms);
        self.active = fall.surviving;
        report.lives_lost = fall.lives_lost;
        if fall.lives_lost > 0 {
            let lost = u8::try_from(fall.lives_lost).unwrap_or(u8::MAX);
            self.lives = self.lives.saturating_sub(lost);
            self.combo = 0;
            debug!(lives = self.lives, lost = fall.lives_lost, "challenge hit the ground");
        }

        if self.lives == 0 {
            self.phase = Phase::Over;
            self.high_score = self.high_score.max(self.score);
            report.game_over = true;
            info!(score = self.score, high_score = self.high_score, "runner over");
        }

        report
    }

    /// Matches `text` against the falling challenges, ignoring case and
    /// surrounding whitespace.
    pub fn submit_answer(&mut self, text: &str) -> AnswerOutcome
    {
        let answer = text.trim().to_lowercase();
        if self.phase != Phase::Playing || answer.is_empty() {
            return AnswerOutcome::Ignored;
        }

        let matched = self
            .active
            .iter()
            .position(|falling| falling.challenge.expected_answer.to_lowercase() == answer);

        match matched {
            Some(index) => {
                let falling = self.active.remove(index);
                let points = BASE_POINTS + self.combo * COMBO_BONUS;
                self.score += points;
                self.combo += 1;
                debug!(id = falling.id, points, combo = self.combo, "answer matched");
                AnswerOutcome::Correct { points }
            }
            None => {
                self.combo = 0;
                debug!(answer = %answer, "answer missed");
                AnswerOutcome::Wrong
            }
        }
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn score(&self) -> u32
    {
        self.score
    }

    pub fn lives(&self) -> u8
    {
        self.lives
    }

    pub fn combo(&self) -> u32
    {
        self.combo
    }

    pub fn high_score(&self) -> u32
    {
        self.high_score
    }

    pub fn active(&self) -> &[FallingChallenge]
    {
        &self.active
    }

    pub fn catalog(&self) -> &[Challenge]
    {
        &self.catalog
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::random::ScriptedPicker;
    use assert_matches::assert_matches;

    fn playing() -> RunnerSession<ScriptedPicker>
    {
        let mut session = RunnerSession::new(ScriptedPicker::new([0, 4, 11])).unwrap();
        session.start();
        session
    }

    #[test]
    fn starts_idle_and_ignores_ticks()
    {
        let mut session = RunnerSession::new(ScriptedPicker::always(0)).unwrap();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.tick(5000.0), TickReport::default());
        assert!(session.active().is_empty());
        assert_eq!(session.submit_answer("hablo"), AnswerOutcome::Ignored);
    }

    #[test]
    fn empty_catalog_is_an_error()
    {
        let result = RunnerSession::with_challenges(&[], ScriptedPicker::always(0));
        assert_matches!(result, Err(HubError::EmptyCatalog(_)));
    }

    #[test]
    fn first_spawn_after_two_seconds()
    {
        let mut session = playing();
        assert_eq!(session.tick(1000.0).spawned, None);
        let report = session.tick(1001.0);
        assert_eq!(report.spawned, Some(0));
        assert_eq!(session.active().len(), 1);
        // The new challenge already fell for this frame.
        assert!(session.active()[0].position > 0.0);
    }

    #[test]
    fn blank_answer_keeps_combo()
    {
        let mut session = playing();
        session.tick(2001.0);
        assert_matches!(session.submit_answer("HABLO"), AnswerOutcome::Correct { points: 10 });
        assert_eq!(session.submit_answer("   "), AnswerOutcome::Ignored);
        assert_eq!(session.combo(), 1);
    }

    #[test]
    fn wrong_answer_resets_combo_without_penalty()
    {
        let mut session = playing();
        session.tick(2001.0);
        session.submit_answer("hablo");
        assert_eq!(session.submit_answer("nada"), AnswerOutcome::Wrong);
        assert_eq!(session.combo(), 0);
        assert_eq!(session.score(), 10);
        assert_eq!(session.lives(), START_LIVES);
    }

    #[test]
    fn ground_hits_end_the_round_once()
    {
        let mut session = playing();
        let mut lost = 0;
        let mut overs = 0;
        // Each 4.8s frame spawns one challenge and drops it straight through.
        for _ in 0..6 {
            let report = session.tick(4800.0);
            lost += report.lives_lost;
            if report.game_over {
                overs += 1;
            }
        }
        assert_eq!(lost, 3);
        assert_eq!(overs, 1);
        assert_eq!(session.phase(), Phase::Over);
        assert_eq!(session.lives(), 0);
        assert_eq!(session.submit_answer("hablo"), AnswerOutcome::Ignored);
    }

    #[test]
    fn restart_keeps_high_score()
    {
        let mut session = playing();
        session.tick(2001.0);
        session.submit_answer("hablo");
        while session.phase() == Phase::Playing {
            session.tick(4800.0);
        }
        assert_eq!(session.high_score(), 10);

        session.start();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), START_LIVES);
        assert_eq!(session.combo(), 0);
        assert!(session.active().is_empty());
        assert_eq!(session.high_score(), 10);
    }
}
