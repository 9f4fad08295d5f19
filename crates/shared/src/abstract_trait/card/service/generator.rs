use crate::{
    domain::requests::GenerationRequest,
    errors::GenerationError,
    model::{CardRecord, ExpiryMode},
};
use std::sync::Arc;

pub trait CardGeneratorServiceTrait {
    /// One record seeded with `prefix`. Fails on a malformed prefix or explicit expiry.
    fn generate(&self, prefix: &str, expiry: &ExpiryMode) -> Result<CardRecord, GenerationError>;

    /// `req.count` records sharing one resolved prefix and expiry policy, in generation order.
    fn generate_batch(&self, req: &GenerationRequest) -> Result<Vec<CardRecord>, GenerationError>;
}

pub type DynCardGeneratorService = Arc<dyn CardGeneratorServiceTrait + Send + Sync>;
