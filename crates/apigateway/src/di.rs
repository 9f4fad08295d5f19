use shared::{
    abstract_trait::card::service::{DynCardGeneratorService, DynCardSerializerService},
    config::GeneratorConfig,
    service::card::{CardGeneratorService, CardSerializerService},
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_generator: DynCardGeneratorService,
    pub card_serializer: DynCardSerializerService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("card_generator", &"CardGeneratorService")
            .field("card_serializer", &"CardSerializerService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &GeneratorConfig, metrics: Metrics) -> Self {
        let card_generator = Arc::new(CardGeneratorService::new(config, metrics.clone()))
            as DynCardGeneratorService;

        let card_serializer =
            Arc::new(CardSerializerService::new(metrics)) as DynCardSerializerService;

        Self {
            card_generator,
            card_serializer,
        }
    }
}
