use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{config::GeneratorConfig, utils::Metrics};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(config: &GeneratorConfig) -> Self {
        let metrics = Metrics::new();

        let mut registry = Registry::default();
        metrics.register(&mut registry);

        let di_container = DependenciesInject::new(config, metrics);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
