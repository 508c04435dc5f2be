use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError
{
    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("failed to set up logging: {0}")]
    Log(String),
}

pub type Result<T> = std::result::Result<T, HubError>;
