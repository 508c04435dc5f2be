//! Spanish revision games: a Wordle-style guesser and a falling-verb typing
//! runner, each a synchronous state machine with a terminal host on top.

pub mod config;
pub mod error;
pub mod games;
pub mod logging;
pub mod random;
pub mod stats;
pub mod terminal;
pub mod timer;
pub mod words;

pub use config::HubConfig;
pub use error::{HubError, Result};
