use crate::{
    errors::GenerationError,
    model::{CardRecord, OutputFormat},
};
use std::sync::Arc;

pub trait CardSerializerServiceTrait {
    fn serialize(
        &self,
        records: &[CardRecord],
        format: OutputFormat,
    ) -> Result<String, GenerationError>;
}

pub type DynCardSerializerService = Arc<dyn CardSerializerServiceTrait + Send + Sync>;
