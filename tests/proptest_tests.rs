//! Property-based tests for CN code handling.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use tedb::core::*;

/// 2, 4, 6 or 8 ASCII digits.
fn arb_code() -> impl Strategy<Value = String> {
    prop::sample::select(vec![2usize, 4, 6, 8])
        .prop_flat_map(|len| prop::collection::vec(0u8..10, len))
        .prop_map(|digits| digits.iter().map(|d| char::from(b'0' + d)).collect())
}

proptest! {
    #[test]
    fn split_rejoins_to_canonical(code in arb_code()) {
        let parts = split_cn_code(&code).unwrap();
        prop_assert_eq!(parts.concat(), code.clone());

        let canonical = parts.join(" ");
        prop_assert_eq!(split_cn_code(&canonical).unwrap(), parts.clone());
        prop_assert_eq!(canonical_cn_code(&canonical).unwrap(), canonical);
    }

    #[test]
    fn split_segment_shape(code in arb_code()) {
        let parts = split_cn_code(&code).unwrap();
        if code.len() <= 4 {
            prop_assert_eq!(parts.len(), 1);
        } else {
            prop_assert_eq!(parts[0].len(), 4);
            prop_assert!(parts[1..].iter().all(|p| p.len() == 2));
            prop_assert_eq!(parts.len(), 1 + (code.len() - 4) / 2);
        }
    }

    #[test]
    fn odd_lengths_rejected(digits in prop::collection::vec(0u8..10, 1..=9usize)) {
        prop_assume!(digits.len() % 2 == 1);
        let code: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert!(split_cn_code(&code).is_err());
    }

    #[test]
    fn split_never_panics(input in ".{0,16}") {
        let _ = split_cn_code(&input);
    }

    #[test]
    fn duplicate_check_ignores_case(code in "[A-Z]{2}") {
        let lower = code.to_lowercase();
        let items = [code.as_str(), lower.as_str()];
        prop_assert!(check_no_duplicates(CriteriaField::CountryCodes, &items).is_err());
    }
}
