use crate::model::{CardType, OutputFormat};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardTypeResponse {
    pub name: String,
    pub prefix: String,
}

impl From<CardType> for CardTypeResponse {
    fn from(value: CardType) -> Self {
        Self {
            name: value.name().to_string(),
            prefix: value.default_prefix().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratedCardsResponse {
    pub format: OutputFormat,
    pub count: usize,
    pub payload: String,
}
