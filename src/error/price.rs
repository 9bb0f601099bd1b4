use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Invalid ESI base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("ESI market prices request failed with status {0}")]
    UnexpectedStatus(u16),
}
