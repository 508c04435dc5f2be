use crate::random::RngPicker;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Settings shared by every game launched from the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubConfig
{
    /// Fixed seed for word and challenge selection.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl HubConfig
{
    pub fn picker(&self) -> RngPicker<StdRng>
    {
        match self.seed {
            Some(seed) => RngPicker::seeded(seed),
            None => RngPicker::from_entropy(),
        }
    }
}
