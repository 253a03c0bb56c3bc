// Property-based tests for order total pricing
//
// Properties tested:
// 1. Fully matched requests: total = Σ price × count
// 2. Requests for unknown medicines add nothing to the total
// 3. Duplicate requests are priced independently
// 4. Total is never negative for non-negative prices and positive counts

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pharmacy_api::medicines::Medicine;
use pharmacy_api::orders::{compute_total_price, CreateOrderLineRequest};

/// Catalogue with ids 1..=n and prices given in cents
fn catalogue(prices_cents: &[u32]) -> Vec<Medicine> {
    prices_cents
        .iter()
        .enumerate()
        .map(|(i, cents)| {
            Medicine::new(i as i64 + 1, format!("medicine-{}", i + 1), Decimal::new(i64::from(*cents), 2))
        })
        .collect()
}

proptest! {
    /// Property: total equals the sum of price × count when every line matches
    #[test]
    fn test_total_is_sum_of_lines(
        prices in prop::collection::vec(0u32..1_000_000, 1..8),
        counts in prop::collection::vec(1i32..500, 1..12),
    ) {
        let medicines = catalogue(&prices);
        let requests: Vec<CreateOrderLineRequest> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| CreateOrderLineRequest::new((i % medicines.len()) as i64 + 1, *count))
            .collect();

        let expected: Decimal = requests
            .iter()
            .map(|r| medicines[(r.medicine_id - 1) as usize].price * Decimal::from(r.count))
            .sum();

        prop_assert_eq!(compute_total_price(&medicines, &requests), expected);
    }

    /// Property: an unknown medicine id never changes the total
    #[test]
    fn test_unknown_medicine_contributes_zero(
        prices in prop::collection::vec(1u32..100_000, 1..6),
        count in 1i32..100,
        unknown_count in 1i32..100,
    ) {
        let medicines = catalogue(&prices);
        let known = vec![CreateOrderLineRequest::new(1, count)];
        let mut with_unknown = known.clone();
        with_unknown.push(CreateOrderLineRequest::new(10_000, unknown_count));

        prop_assert_eq!(
            compute_total_price(&medicines, &known),
            compute_total_price(&medicines, &with_unknown)
        );
    }

    /// Property: total is non-negative
    #[test]
    fn test_total_is_non_negative(
        prices in prop::collection::vec(0u32..1_000_000, 0..6),
        counts in prop::collection::vec(1i32..1_000, 0..6),
    ) {
        let medicines = catalogue(&prices);
        let requests: Vec<CreateOrderLineRequest> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| CreateOrderLineRequest::new(i as i64 + 1, *count))
            .collect();

        prop_assert!(compute_total_price(&medicines, &requests) >= Decimal::ZERO);
    }
}

#[test]
fn test_reference_scenario_two_units_at_one_hundred() {
    let medicines = vec![Medicine::new(5, "Ibuprofen", dec!(100))];
    let requests = [CreateOrderLineRequest::new(5, 2)];

    assert_eq!(compute_total_price(&medicines, &requests), dec!(200));
}

#[test]
fn test_no_matches_yields_zero() {
    let medicines = vec![Medicine::new(1, "Aspirin", dec!(9.99))];
    let requests = [CreateOrderLineRequest::new(2, 3)];

    assert_eq!(compute_total_price(&medicines, &requests), Decimal::ZERO);
}

#[test]
fn test_duplicate_lines_are_summed() {
    let medicines = vec![Medicine::new(1, "Aspirin", dec!(9.99))];
    let requests = [CreateOrderLineRequest::new(1, 1), CreateOrderLineRequest::new(1, 2)];

    assert_eq!(compute_total_price(&medicines, &requests), dec!(29.97));
}
