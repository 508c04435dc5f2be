//! One-shot deferred signals driven by the host's frame loop.
//!
//! The sessions stay synchronous; hosts arm a [`Deadline`] when a session asks
//! for a delay (row reveal, invalid-row shake, answer flash) and poll it every
//! frame.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline<T>
{
    at: Instant,
    payload: T,
}

impl<T: Copy> Deadline<T>
{
    pub fn after(now: Instant, delay: Duration, payload: T) -> Self
    {
        Self {
            at: now + delay,
            payload,
        }
    }

    pub fn payload(&self) -> T
    {
        self.payload
    }

    pub fn is_due(&self, now: Instant) -> bool
    {
        now >= self.at
    }
}

/// Takes the payload out of `slot` once its deadline has passed.
pub fn fire<T: Copy>(slot: &mut Option<Deadline<T>>, now: Instant) -> Option<T>
{
    match slot {
        Some(deadline) if deadline.is_due(now) => {
            let payload = deadline.payload();
            *slot = None;
            Some(payload)
        }
        _ => None,
    }
}
