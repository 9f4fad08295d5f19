use crate::{
    abstract_trait::card::service::CardGeneratorServiceTrait,
    config::GeneratorConfig,
    domain::requests::GenerationRequest,
    errors::GenerationError,
    model::{CardPrefix, CardRecord, ExpiryMode},
    utils::{
        Method, Metrics, Status, mask_card_number, normalize_expiry, random_card_number,
        random_cvv, random_expiry,
    },
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};
use tracing::{debug, error, info};

/// Where generation draws its entropy from.
enum RandomSource {
    /// Per-thread OS-seeded generator; concurrent callers never contend.
    Thread,
    /// One deterministic stream, locked for the whole batch so record order is reproducible.
    Seeded(Mutex<ChaCha8Rng>),
}

pub struct CardGeneratorService {
    max_batch_size: usize,
    source: RandomSource,
    metrics: Metrics,
}

impl CardGeneratorService {
    pub fn new(config: &GeneratorConfig, metrics: Metrics) -> Self {
        let source = match config.seed {
            Some(seed) => {
                info!("🎲 Card generator seeded with {seed}");
                RandomSource::Seeded(Mutex::new(ChaCha8Rng::seed_from_u64(seed)))
            }
            None => RandomSource::Thread,
        };

        Self {
            max_batch_size: config.max_batch_size,
            source,
            metrics,
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.source {
            RandomSource::Thread => f(&mut rand::rng()),
            RandomSource::Seeded(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }

    fn build_batch(&self, req: &GenerationRequest) -> Result<Vec<CardRecord>, GenerationError> {
        if req.count == 0 || req.count > self.max_batch_size {
            return Err(GenerationError::InvalidCount {
                requested: req.count,
                max: self.max_batch_size,
            });
        }

        let prefix = req.resolve_prefix()?;

        // Checked once up front so a bad expiry fails before any record exists.
        let expiry = fixed_expiry(&req.expiry_mode()?)?;

        info!(
            "🎴 Generating {} cards | BIN: {}, Expiry: {}",
            req.count,
            prefix,
            expiry.as_deref().unwrap_or("random")
        );

        self.with_rng(|rng| {
            (0..req.count)
                .map(|_| build_record(&mut *rng, &prefix, expiry.as_deref()))
                .collect()
        })
    }
}

/// Normalized expiry shared by every record, or `None` when each record draws its own.
fn fixed_expiry(mode: &ExpiryMode) -> Result<Option<String>, GenerationError> {
    match mode {
        ExpiryMode::Random => Ok(None),
        ExpiryMode::Explicit(raw) => normalize_expiry(raw).map(Some),
    }
}

fn build_record<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &CardPrefix,
    fixed_expiry: Option<&str>,
) -> Result<CardRecord, GenerationError> {
    let card_number = random_card_number(rng, prefix)?;
    let cvv = random_cvv(rng);
    let expiry = match fixed_expiry {
        Some(expiry) => expiry.to_string(),
        None => random_expiry(rng),
    };

    debug!("Generated card {}", mask_card_number(&card_number));

    Ok(CardRecord {
        card_number,
        cvv,
        expiry,
        bin: prefix.to_string(),
    })
}

impl CardGeneratorServiceTrait for CardGeneratorService {
    fn generate(&self, prefix: &str, expiry: &ExpiryMode) -> Result<CardRecord, GenerationError> {
        let prefix = CardPrefix::parse(prefix).inspect_err(|e| error!("❌ {e}"))?;
        let expiry = fixed_expiry(expiry).inspect_err(|e| error!("❌ {e}"))?;
        self.with_rng(|rng| build_record(rng, &prefix, expiry.as_deref()))
    }

    fn generate_batch(&self, req: &GenerationRequest) -> Result<Vec<CardRecord>, GenerationError> {
        let start_time = Instant::now();
        let result = self.build_batch(req);
        let elapsed = start_time.elapsed().as_secs_f64();

        match &result {
            Ok(records) => {
                info!("✅ Generated {} cards in {elapsed:.6}s", records.len());
                self.metrics.record(Method::Generate, Status::Success, elapsed);
            }
            Err(e) => {
                error!("❌ Failed to generate cards: {e}");
                self.metrics.record(Method::Generate, Status::Error, elapsed);
            }
        }

        result
    }
}
