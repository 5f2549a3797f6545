//! Property-based tests for scientific list formatting
//!
//! These tests verify invariants that should hold for all inputs:
//! - Field count matches input length
//! - Finite values round-trip bit for bit, in order
//! - Output is deterministic
//! - Every finite field has a 17 digit mantissa and a signed exponent

use proptest::prelude::*;
use vecfmt::{format_scientific, format_values, ScientificList, MAX_DIGITS10};

/// Any finite f64, including subnormals and both zeros
fn finite_f64() -> impl Strategy<Value = f64> {
    any::<u64>()
        .prop_map(f64::from_bits)
        .prop_filter("finite", |v| v.is_finite())
}

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => finite_f64(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn is_scientific_field(field: &str) -> bool {
    let unsigned = field.strip_prefix('-').unwrap_or(field);
    let Some((mantissa, exponent)) = unsigned.split_once('e') else {
        return false;
    };
    let Some((whole, fraction)) = mantissa.split_once('.') else {
        return false;
    };
    let exponent_digits = match exponent.strip_prefix(['+', '-']) {
        Some(digits) => digits,
        None => return false,
    };

    whole.len() == 1
        && fraction.len() == MAX_DIGITS10 - 1
        && whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit())
        && exponent_digits.len() >= 2
        && exponent_digits.chars().all(|c| c.is_ascii_digit())
}

proptest! {
    /// Property: one field per input element, joined by n-1 commas
    #[test]
    fn prop_field_count_matches_input(values in prop::collection::vec(any_f64(), 0..64)) {
        let out = format_values(&values);

        if values.is_empty() {
            prop_assert_eq!(out, "");
        } else {
            prop_assert_eq!(out.matches(',').count(), values.len() - 1);
            prop_assert!(!out.starts_with(','));
            prop_assert!(!out.ends_with(','));
            prop_assert_eq!(out.split(',').count(), values.len());
        }
    }

    /// Property: finite values parse back bit-identical, in order
    #[test]
    fn prop_finite_values_round_trip(values in prop::collection::vec(finite_f64(), 1..64)) {
        let out = format_values(&values);

        for (field, original) in out.split(',').zip(&values) {
            let parsed: f64 = field.parse().unwrap();
            prop_assert_eq!(parsed.to_bits(), original.to_bits(), "field {}", field);
        }
    }

    /// Property: every finite field uses the fixed scientific layout
    #[test]
    fn prop_finite_fields_are_scientific(value in finite_f64()) {
        let field = format_scientific(value);
        prop_assert!(is_scientific_field(&field), "bad field {}", field);
    }

    /// Property: the same input always formats the same way, via every entry point
    #[test]
    fn prop_formatting_is_deterministic(values in prop::collection::vec(any_f64(), 0..32)) {
        let first = format_values(&values);
        prop_assert_eq!(&first, &format_values(&values));
        prop_assert_eq!(&first, &ScientificList(&values).to_string());

        let joined = values
            .iter()
            .map(|v| format_scientific(*v))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(first, joined);
    }
}
