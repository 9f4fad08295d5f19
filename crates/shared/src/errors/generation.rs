use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid prefix '{0}': expected 1 to 15 decimal digits")]
    InvalidPrefix(String),

    #[error("Invalid expiry '{0}': expected MM/YY")]
    InvalidExpiry(String),

    #[error("No prefix resolved: supply a BIN or a known card type")]
    NoPrefixResolved,

    #[error("Unsupported format '{0}': expected json, csv or compact")]
    UnsupportedFormat(String),

    #[error("Invalid count {requested}: must be between 1 and {max}")]
    InvalidCount { requested: usize, max: usize },

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl GenerationError {
    /// True when the caller supplied bad input, as opposed to an internal fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, GenerationError::Encoding(_))
    }
}
