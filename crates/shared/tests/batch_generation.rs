use shared::{
    abstract_trait::card::service::{CardGeneratorServiceTrait, CardSerializerServiceTrait},
    config::GeneratorConfig,
    domain::requests::GenerationRequest,
    errors::GenerationError,
    model::{CardRecord, OutputFormat},
    service::card::{CSV_HEADER, CardGeneratorService, CardSerializerService},
    utils::{Metrics, is_luhn_valid},
};
use std::{sync::Arc, thread};

fn generator() -> CardGeneratorService {
    CardGeneratorService::new(&GeneratorConfig::default(), Metrics::new())
}

fn serializer() -> CardSerializerService {
    CardSerializerService::new(Metrics::new())
}

#[test]
fn batch_from_explicit_bin() {
    let req = GenerationRequest::new(5, "json").with_bin("4");
    let records = generator().generate_batch(&req).unwrap();

    assert_eq!(records.len(), 5);
    for record in &records {
        assert!(record.card_number.starts_with('4'));
        assert_eq!(record.card_number.len(), 16);
        assert!(is_luhn_valid(&record.card_number));
        assert_eq!(record.bin, "4");
    }
}

#[test]
fn repeated_batches_differ_but_share_shape() {
    let req = GenerationRequest::new(5, "json").with_bin("4");
    let svc = generator();

    let first = svc.generate_batch(&req).unwrap();
    let second = svc.generate_batch(&req).unwrap();

    let numbers = |records: &[CardRecord]| -> Vec<String> {
        records.iter().map(|r| r.card_number.clone()).collect()
    };
    assert_ne!(numbers(&first), numbers(&second));
    assert!(second.iter().all(|r| is_luhn_valid(&r.card_number)));
}

#[test]
fn card_type_default_resolves_prefix() {
    let req = GenerationRequest::new(3, "csv").with_card_type("mastercard");
    let records = generator().generate_batch(&req).unwrap();

    assert!(records.iter().all(|r| r.card_number.starts_with('5')));
    assert!(records.iter().all(|r| r.bin == "5"));
}

#[test]
fn invalid_inputs_fail_before_generation() {
    let svc = generator();

    let no_prefix = GenerationRequest::new(3, "json");
    assert!(matches!(
        svc.generate_batch(&no_prefix),
        Err(GenerationError::NoPrefixResolved)
    ));

    let bad_bin = GenerationRequest::new(3, "json").with_bin("4 1");
    assert!(matches!(
        svc.generate_batch(&bad_bin),
        Err(GenerationError::InvalidPrefix(_))
    ));

    let bad_expiry = GenerationRequest::new(3, "json")
        .with_bin("4")
        .with_expiry("12");
    assert!(matches!(
        svc.generate_batch(&bad_expiry),
        Err(GenerationError::InvalidExpiry(_))
    ));
}

#[test]
fn unsupported_format_is_an_error_not_empty_output() {
    let req = GenerationRequest::new(1, "xml").with_bin("4");
    assert!(matches!(
        req.output_format(),
        Err(GenerationError::UnsupportedFormat(f)) if f == "xml"
    ));
}

#[test]
fn generate_then_serialize_every_format() {
    let req = GenerationRequest::new(4, "compact")
        .with_bin("34")
        .with_expiry("3/27");
    let records = generator().generate_batch(&req).unwrap();
    let serializer = serializer();

    let compact = serializer
        .serialize(&records, req.output_format().unwrap())
        .unwrap();
    let lines: Vec<&str> = compact.lines().collect();
    assert_eq!(lines.len(), 4);
    for (line, record) in lines.iter().zip(&records) {
        assert_eq!(
            *line,
            format!("{}|03|27|{}", record.card_number, record.cvv)
        );
    }

    let csv = serializer.serialize(&records, OutputFormat::Csv).unwrap();
    let mut csv_lines = csv.lines();
    assert_eq!(csv_lines.next(), Some(CSV_HEADER));
    assert_eq!(csv_lines.count(), 4);

    let json = serializer.serialize(&records, OutputFormat::Json).unwrap();
    let decoded: Vec<CardRecord> = serde_json::Deserializer::from_str(&json)
        .into_iter::<CardRecord>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded, records);
}

#[test]
fn seeded_generator_is_shared_safely_across_threads() {
    let config = GeneratorConfig {
        max_batch_size: 50,
        seed: Some(7),
    };
    let svc = Arc::new(CardGeneratorService::new(&config, Metrics::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                let req = GenerationRequest::new(50, "json").with_card_type("discover");
                svc.generate_batch(&req).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let records = handle.join().unwrap();
        assert_eq!(records.len(), 50);
        assert!(records.iter().all(|r| r.card_number.starts_with('6')));
        assert!(records.iter().all(|r| is_luhn_valid(&r.card_number)));
    }
}
