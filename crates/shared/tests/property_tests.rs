use proptest::prelude::*;
use shared::{
    abstract_trait::card::service::CardGeneratorServiceTrait,
    config::GeneratorConfig,
    model::ExpiryMode,
    service::card::CardGeneratorService,
    utils::{Metrics, is_luhn_valid, luhn_check_digit, normalize_expiry},
};

fn generator() -> CardGeneratorService {
    CardGeneratorService::new(&GeneratorConfig::default(), Metrics::new())
}

/// Independent check: every second digit from the right doubled, digit sums added.
fn reference_luhn(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            let d = c.to_digit(10).unwrap_or(0);
            if i % 2 == 1 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

proptest! {
    #[test]
    fn generated_numbers_keep_prefix_and_pass_luhn(prefix in "[0-9]{1,15}") {
        let record = generator().generate(&prefix, &ExpiryMode::Random).unwrap();

        prop_assert_eq!(record.card_number.len(), 16);
        prop_assert!(record.card_number.starts_with(&prefix));
        prop_assert!(record.card_number.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(is_luhn_valid(&record.card_number));
        prop_assert!(reference_luhn(&record.card_number));
        prop_assert_eq!(record.bin, prefix);
    }

    #[test]
    fn generated_cvv_and_expiry_are_in_range(prefix in "[0-9]{1,6}") {
        let record = generator().generate(&prefix, &ExpiryMode::Random).unwrap();

        prop_assert!((100..=999).contains(&record.cvv));
        let (month, year) = record.expiry.split_once('/').unwrap();
        prop_assert!((1..=12).contains(&month.parse::<u8>().unwrap()));
        prop_assert!((24..=30).contains(&year.parse::<u8>().unwrap()));
    }

    #[test]
    fn check_digit_completes_any_body(body in "[0-9]{1,18}") {
        let check = luhn_check_digit(&body).unwrap();
        prop_assert!(check <= 9);
        let full = format!("{body}{check}");
        prop_assert!(is_luhn_valid(&full));
        prop_assert!(reference_luhn(&full));
    }

    #[test]
    fn single_digit_change_breaks_validity(body in "[0-9]{15}", position in 0usize..16, bump in 1u8..10) {
        let check = luhn_check_digit(&body).unwrap();
        let mut digits: Vec<u8> = format!("{body}{check}").into_bytes();
        digits[position] = b'0' + (digits[position] - b'0' + bump) % 10;
        let altered = String::from_utf8(digits).unwrap();

        prop_assert!(!is_luhn_valid(&altered));
    }

    #[test]
    fn explicit_expiry_pads_each_part(month in 0u8..100, year in 0u8..100) {
        let normalized = normalize_expiry(&format!("{month}/{year}")).unwrap();
        prop_assert_eq!(normalized, format!("{month:02}/{year:02}"));
    }

    #[test]
    fn non_digit_prefixes_are_rejected(prefix in "[0-9]{0,4}[^0-9][0-9]{0,4}") {
        prop_assert!(generator().generate(&prefix, &ExpiryMode::Random).is_err());
    }
}
