//! Guesser statistics and the store they are read from and written to.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats
{
    pub streak: u32,
    pub wins: u32,
    pub played: u32,
}

impl SessionStats
{
    pub fn record_win(self) -> Self
    {
        Self {
            streak: self.streak + 1,
            wins: self.wins + 1,
            played: self.played + 1,
        }
    }

    pub fn record_loss(self) -> Self
    {
        Self {
            streak: 0,
            wins: self.wins,
            played: self.played + 1,
        }
    }

    /// Percentage of played games that were won.
    pub fn win_rate(&self) -> u32
    {
        if self.played == 0 {
            return 0;
        }
        self.wins * 100 / self.played
    }
}

pub trait StatsStore
{
    fn get(&self) -> SessionStats;
    fn set(&mut self, stats: SessionStats);
}

/// Keeps stats for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore
{
    stats: SessionStats,
}

impl MemoryStatsStore
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn with_stats(stats: SessionStats) -> Self
    {
        Self { stats }
    }
}

impl StatsStore for MemoryStatsStore
{
    fn get(&self) -> SessionStats
    {
        self.stats
    }

    fn set(&mut self, stats: SessionStats)
    {
        self.stats = stats;
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn win_then_loss_resets_streak_only()
    {
        let stats = SessionStats::default().record_win().record_win();
        assert_eq!(stats, SessionStats { streak: 2, wins: 2, played: 2 });
        let stats = stats.record_loss();
        assert_eq!(stats, SessionStats { streak: 0, wins: 2, played: 3 });
        assert_eq!(stats.win_rate(), 66);
    }

    #[test]
    fn memory_store_round_trips()
    {
        let mut store = MemoryStatsStore::new();
        assert_eq!(store.get(), SessionStats::default());
        let stats = SessionStats { streak: 3, wins: 4, played: 9 };
        store.set(stats);
        assert_eq!(store.get(), stats);
    }
}
