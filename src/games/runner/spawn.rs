//! Decides when a new challenge enters the field and how fast it falls.

use super::fall::FallingChallenge;
use crate::random::Picker;
use crate::words::Challenge;

pub const BASE_INTERVAL_MS: f64 = 2000.0;
pub const INTERVAL_STEP_MS: f64 = 30.0;
pub const MIN_INTERVAL_MS: f64 = 800.0;
pub const BASE_FALL_RATE: f64 = 0.4;
pub const FALL_RATE_PER_POINT: f64 = 0.01;
pub const MAX_FALL_BONUS: f64 = 0.8;

/// Gap between spawns; shrinks by 30ms per point down to 800ms.
pub fn spawn_interval_ms(score: u32) -> f64
{
    (BASE_INTERVAL_MS - f64::from(score) * INTERVAL_STEP_MS).max(MIN_INTERVAL_MS)
}

pub fn should_spawn(elapsed_since_last_spawn_ms: f64, score: u32) -> bool
{
    elapsed_since_last_spawn_ms > spawn_interval_ms(score)
}

pub fn fall_rate(score: u32) -> f64
{
    BASE_FALL_RATE + (f64::from(score) * FALL_RATE_PER_POINT).min(MAX_FALL_BONUS)
}

#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler
{
    elapsed_ms: f64,
    next_id: u64,
}

impl SpawnScheduler
{
    pub fn reset(&mut self)
    {
        *self = Self::default();
    }

    pub fn elapsed_ms(&self) -> f64
    {
        self.elapsed_ms
    }

    /// Accumulates `dt_ms` and spawns a challenge once the interval is exceeded.
    pub fn tick<P: Picker>(
        &mut self,
        dt_ms: f64,
        score: u32,
        catalog: &[Challenge],
        picker: &mut P,
    ) -> Option<FallingChallenge>
    {
        self.elapsed_ms += dt_ms.max(0.0);
        if !should_spawn(self.elapsed_ms, score) {
            return None;
        }
        self.elapsed_ms = 0.0;

        let challenge = *picker.pick(catalog)?;
        let id = self.next_id;
        self.next_id += 1;
        Some(FallingChallenge {
            id,
            challenge,
            position: 0.0,
            fall_rate: fall_rate(score),
        })
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::random::ScriptedPicker;
    use crate::words::VERB_CHALLENGES;

    #[test]
    fn interval_shrinks_to_floor()
    {
        assert_eq!(spawn_interval_ms(0), 2000.0);
        assert_eq!(spawn_interval_ms(10), 1700.0);
        assert_eq!(spawn_interval_ms(40), 800.0);
        assert_eq!(spawn_interval_ms(1000), 800.0);
    }

    #[test]
    fn spawn_needs_strictly_more_than_interval()
    {
        assert!(!should_spawn(2000.0, 0));
        assert!(should_spawn(2000.5, 0));
        assert!(should_spawn(801.0, 500));
    }

    #[test]
    fn fall_rate_bonus_is_capped()
    {
        assert!((fall_rate(0) - 0.4).abs() < 1e-9);
        assert!((fall_rate(50) - 0.9).abs() < 1e-9);
        assert!((fall_rate(80) - 1.2).abs() < 1e-9);
        assert!((fall_rate(10_000) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn scheduler_spawns_and_resets()
    {
        let mut scheduler = SpawnScheduler::default();
        let mut picker = ScriptedPicker::new([3, 5]);

        assert!(scheduler.tick(1500.0, 0, VERB_CHALLENGES, &mut picker).is_none());
        let first = scheduler
            .tick(600.0, 0, VERB_CHALLENGES, &mut picker)
            .expect("spawn after 2100ms");
        assert_eq!(first.id, 0);
        assert_eq!(first.challenge, VERB_CHALLENGES[3]);
        assert_eq!(first.position, 0.0);
        assert_eq!(scheduler.elapsed_ms(), 0.0);

        let second = scheduler
            .tick(900.0, 50, VERB_CHALLENGES, &mut picker)
            .expect("interval is 800ms at score 50");
        assert_eq!(second.id, 1);
        assert_eq!(second.challenge, VERB_CHALLENGES[5]);
        assert!((second.fall_rate - 0.9).abs() < 1e-9);
    }

    #[test]
    fn empty_catalog_spawns_nothing()
    {
        let mut scheduler = SpawnScheduler::default();
        let mut picker = ScriptedPicker::always(0);
        assert!(scheduler.tick(5000.0, 0, &[], &mut picker).is_none());
    }
}
