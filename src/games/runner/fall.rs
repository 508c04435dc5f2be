//! Moves falling challenges towards the ground.

use crate::words::Challenge;

/// Frame length the fall rates are expressed in.
pub const REFERENCE_FRAME_MS: f64 = 16.0;
pub const GROUND: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FallingChallenge
{
    pub id: u64,
    pub challenge: Challenge,
    /// Distance fallen, 0 at the top and [`GROUND`] at the bottom.
    pub position: f64,
    pub fall_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallReport
{
    pub surviving: Vec<FallingChallenge>,
    pub lives_lost: u32,
}

/// Advances every challenge by `dt_ms`; each one that reaches the ground is
/// dropped and costs a life.
pub fn advance(active: Vec<FallingChallenge>, dt_ms: f64) -> FallReport
{
    let frames = dt_ms.max(0.0) / REFERENCE_FRAME_MS;
    let mut report = FallReport {
        surviving: Vec::with_capacity(active.len()),
        lives_lost: 0,
    };

    for mut falling in active {
        falling.position += falling.fall_rate * frames;
        if falling.position >= GROUND {
            report.lives_lost += 1;
        } else {
            report.surviving.push(falling);
        }
    }

    report
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::words::VERB_CHALLENGES;

    fn falling(id: u64, position: f64, fall_rate: f64) -> FallingChallenge
    {
        FallingChallenge {
            id,
            challenge: VERB_CHALLENGES[0],
            position,
            fall_rate,
        }
    }

    #[test]
    fn position_scales_with_elapsed_time()
    {
        let mut active = vec![falling(0, 0.0, 0.5)];
        for dt in [16.0, 8.0, 40.0] {
            active = advance(active, dt).surviving;
        }
        assert!((active[0].position - 0.5 * (64.0 / 16.0)).abs() < 1e-9);
    }

    #[test]
    fn reaching_ground_costs_one_life_each()
    {
        let active = vec![falling(0, 99.0, 1.0), falling(1, 10.0, 1.0), falling(2, 99.9, 0.4)];
        let report = advance(active, 16.0);
        assert_eq!(report.lives_lost, 2);
        assert_eq!(report.surviving.len(), 1);
        assert_eq!(report.surviving[0].id, 1);
        assert!((report.surviving[0].position - 11.0).abs() < 1e-9);
    }

    #[test]
    fn negative_delta_never_lifts()
    {
        let report = advance(vec![falling(0, 50.0, 1.0)], -32.0);
        assert_eq!(report.surviving[0].position, 50.0);
        assert_eq!(report.lives_lost, 0);
    }
}
