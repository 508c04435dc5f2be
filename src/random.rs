//! Uniform sampling over the static catalogs.
//!
//! Sessions never touch `rand` directly; they ask a [`Picker`] for an index so
//! tests can replay a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Picker
{
    /// Returns an index in `0..len`, or `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.pick_index(items.len()).and_then(|idx| items.get(idx))
    }
}

impl<P: Picker + ?Sized> Picker for Box<P>
{
    fn pick_index(&mut self, len: usize) -> Option<usize>
    {
        (**self).pick_index(len)
    }
}

pub struct RngPicker<R>
{
    rng: R,
}

impl<R: Rng> RngPicker<R>
{
    pub fn new(rng: R) -> Self
    {
        Self { rng }
    }
}

impl RngPicker<StdRng>
{
    pub fn seeded(seed: u64) -> Self
    {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self
    {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker for RngPicker<R>
{
    fn pick_index(&mut self, len: usize) -> Option<usize>
    {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each index is reduced modulo the requested length, so a script written for
/// one catalog stays valid for a filtered subset.
#[derive(Debug, Clone)]
pub struct ScriptedPicker
{
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker
{
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self
    {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    pub fn always(index: usize) -> Self
    {
        Self::new([index])
    }
}

impl Picker for ScriptedPicker
{
    fn pick_index(&mut self, len: usize) -> Option<usize>
    {
        if len == 0 || self.script.is_empty() {
            return None;
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        Some(raw % len)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn scripted_picker_cycles_and_wraps()
    {
        let mut picker = ScriptedPicker::new([1, 7]);
        assert_eq!(picker.pick_index(5), Some(1));
        assert_eq!(picker.pick_index(5), Some(2));
        assert_eq!(picker.pick_index(5), Some(1));
    }

    #[test]
    fn empty_collections_yield_nothing()
    {
        let mut scripted = ScriptedPicker::always(0);
        let mut seeded = RngPicker::seeded(7);
        let empty: [u8; 0] = [];
        assert_eq!(scripted.pick(&empty), None);
        assert_eq!(seeded.pick(&empty), None);
    }

    #[test]
    fn seeded_picker_is_reproducible()
    {
        let mut a = RngPicker::seeded(42);
        let mut b = RngPicker::seeded(42);
        let left: Vec<_> = (0..16).map(|_| a.pick_index(100)).collect();
        let right: Vec<_> = (0..16).map(|_| b.pick_index(100)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|idx| idx.is_some_and(|i| i < 100)));
    }
}
