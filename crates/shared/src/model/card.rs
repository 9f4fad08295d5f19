use crate::errors::GenerationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};
use utoipa::ToSchema;

pub const CARD_NUMBER_LENGTH: usize = 16;

/// Longest prefix that still leaves room for the check digit.
pub const MAX_PREFIX_LENGTH: usize = CARD_NUMBER_LENGTH - 1;

static PREFIX_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,15}$").ok());

/// Leading digits a generated card number is seeded with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CardPrefix(String);

impl CardPrefix {
    pub fn parse(value: &str) -> Result<Self, GenerationError> {
        let invalid = || GenerationError::InvalidPrefix(value.to_string());
        let re = PREFIX_REGEX.as_ref().ok_or_else(invalid)?;

        if re.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(invalid())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for CardPrefix {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CardPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CardPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One synthetic card. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub card_number: String,
    pub cvv: u16,
    pub expiry: String,
    pub bin: String,
}

impl CardRecord {
    /// Month and year halves of `expiry`.
    pub fn expiry_parts(&self) -> (&str, &str) {
        self.expiry
            .split_once('/')
            .unwrap_or((self.expiry.as_str(), ""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::Visa,
        CardType::Mastercard,
        CardType::Amex,
        CardType::Discover,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardType::Visa => "visa",
            CardType::Mastercard => "mastercard",
            CardType::Amex => "amex",
            CardType::Discover => "discover",
        }
    }

    pub fn default_prefix(&self) -> &'static str {
        match self {
            CardType::Visa => "4",
            CardType::Mastercard => "5",
            CardType::Amex => "34",
            CardType::Discover => "6",
        }
    }

    /// Case-insensitive lookup in the default table.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|card_type| card_type.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryMode {
    Random,
    Explicit(String),
}
