use thiserror::Error;
use veri_types::ErrorKind;

#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("entropy source not available: {0}")]
    Unavailable(String),

    #[error("entropy source exhausted")]
    Exhausted,
}

impl EntropyError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Unavailable
    }
}
