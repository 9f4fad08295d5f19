use prometheus_client::{
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Generate,
    Serialize,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct MetricLabels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    requests: Family<MetricLabels, Counter>,
    duration: Family<MetricLabels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Family::new_with_constructor(|| {
                Histogram::new(exponential_buckets(0.000_01, 4.0, 10))
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "card_generation_requests",
            "Card generator operations by method and outcome",
            self.requests.clone(),
        );
        registry.register(
            "card_generation_duration_seconds",
            "Card generator operation latency in seconds",
            self.duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, elapsed_secs: f64) {
        let labels = MetricLabels { method, status };
        self.requests.get_or_create(&labels).inc();
        self.duration.get_or_create(&labels).observe(elapsed_secs);
    }

    pub fn count(&self, method: Method, status: Status) -> u64 {
        self.requests
            .get_or_create(&MetricLabels { method, status })
            .get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn records_and_encodes_counters() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        metrics.record(Method::Generate, Status::Success, 0.001);
        metrics.record(Method::Generate, Status::Success, 0.002);
        metrics.record(Method::Serialize, Status::Error, 0.0005);

        assert_eq!(metrics.count(Method::Generate, Status::Success), 2);
        assert_eq!(metrics.count(Method::Serialize, Status::Error), 1);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();
        assert!(buffer.contains("card_generation_requests_total"));
        assert!(buffer.contains("card_generation_duration_seconds"));
    }
}
