use crate::{
    abstract_trait::card::service::CardSerializerServiceTrait,
    errors::GenerationError,
    model::{CardRecord, OutputFormat},
    utils::{Method, Metrics, Status},
};
use std::time::Instant;
use tracing::{error, info};

pub const CSV_HEADER: &str = "cardNumber,cvv,expiry";

pub struct CardSerializerService {
    metrics: Metrics,
}

impl CardSerializerService {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }
}

/// One pretty-printed object per record, newline separated.
fn encode_json(records: &[CardRecord]) -> Result<String, GenerationError> {
    let objects = records
        .iter()
        .map(serde_json::to_string_pretty)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(objects.join("\n"))
}

fn encode_csv(records: &[CardRecord]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            records
                .iter()
                .map(|r| format!("{},{},{}", r.card_number, r.cvv, r.expiry)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn encode_compact(records: &[CardRecord]) -> String {
    records
        .iter()
        .map(|r| {
            let (month, year) = r.expiry_parts();
            format!("{}|{month}|{year}|{}", r.card_number, r.cvv)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl CardSerializerServiceTrait for CardSerializerService {
    fn serialize(
        &self,
        records: &[CardRecord],
        format: OutputFormat,
    ) -> Result<String, GenerationError> {
        let start_time = Instant::now();

        let result = match format {
            OutputFormat::Json => encode_json(records),
            OutputFormat::Csv => Ok(encode_csv(records)),
            OutputFormat::Compact => Ok(encode_compact(records)),
        };

        let elapsed = start_time.elapsed().as_secs_f64();
        match &result {
            Ok(payload) => {
                info!(
                    "📦 Serialized {} cards as {format} ({} bytes)",
                    records.len(),
                    payload.len()
                );
                self.metrics.record(Method::Serialize, Status::Success, elapsed);
            }
            Err(e) => {
                error!("❌ Failed to serialize cards as {format}: {e}");
                self.metrics.record(Method::Serialize, Status::Error, elapsed);
            }
        }

        result
    }
}
