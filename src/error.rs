use thiserror::Error;

/// Errors raised at the data boundary. The resolution core itself never
/// fails; malformed individual entries degrade locally instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch facility data: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to read facility data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode facility data: {0}")]
    Decode(#[from] serde_json::Error),
}
