use crate::{
    errors::GenerationError,
    model::{CardPrefix, CardType, ExpiryMode, OutputFormat},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Parameters for one batch. Built per call; nothing here is shared between requests.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Explicit prefix. Takes precedence over `card_type` when non-empty.
    #[serde(default)]
    pub bin: Option<String>,

    #[serde(default)]
    pub card_type: Option<String>,

    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: usize,

    #[serde(default = "default_use_random_expiry")]
    pub use_random_expiry: bool,

    /// `MM/YY`, used only when `use_random_expiry` is false.
    #[serde(default)]
    pub expiry: Option<String>,

    #[validate(length(min = 1, message = "format is required"))]
    pub format: String,
}

fn default_use_random_expiry() -> bool {
    true
}

impl GenerationRequest {
    pub fn new(count: usize, format: impl Into<String>) -> Self {
        Self {
            bin: None,
            card_type: None,
            count,
            use_random_expiry: true,
            expiry: None,
            format: format.into(),
        }
    }

    pub fn with_bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.use_random_expiry = false;
        self.expiry = Some(expiry.into());
        self
    }

    /// Explicit BIN when non-empty, otherwise the card type's default prefix.
    pub fn resolve_prefix(&self) -> Result<CardPrefix, GenerationError> {
        if let Some(bin) = self.bin.as_deref().filter(|b| !b.is_empty()) {
            return CardPrefix::parse(bin);
        }

        self.card_type
            .as_deref()
            .and_then(CardType::from_name)
            .ok_or(GenerationError::NoPrefixResolved)
            .and_then(|card_type| CardPrefix::parse(card_type.default_prefix()))
    }

    pub fn expiry_mode(&self) -> Result<ExpiryMode, GenerationError> {
        if self.use_random_expiry {
            return Ok(ExpiryMode::Random);
        }

        match self.expiry.as_deref() {
            Some(expiry) if !expiry.is_empty() => Ok(ExpiryMode::Explicit(expiry.to_string())),
            other => Err(GenerationError::InvalidExpiry(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    pub fn output_format(&self) -> Result<OutputFormat, GenerationError> {
        self.format.parse()
    }
}
