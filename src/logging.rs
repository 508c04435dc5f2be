use crate::error::{HubError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// The games own the alternate screen, so anything below `warn` only makes
/// sense when written to a file.
pub fn init(log_file: Option<&Path>) -> Result<()>
{
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("debug"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| HubError::Log(err.to_string()))
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter("warn"))
            .without_time()
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| HubError::Log(err.to_string())),
    }
}

fn filter(default: &str) -> EnvFilter
{
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
