// Property-based tests for basket line construction
//
// Properties tested:
// 1. One basket per matched (medicine, request) pair
// 2. Each basket price = medicine price × count
// 3. Every basket carries the owning order id
// 4. Baskets are emitted medicine-major
// 5. Basket prices sum to the computed order total

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pharmacy_api::medicines::Medicine;
use pharmacy_api::orders::{build_basket_lines, compute_total_price, CreateOrderLineRequest};

fn catalogue(prices_cents: &[u32]) -> Vec<Medicine> {
    prices_cents
        .iter()
        .enumerate()
        .map(|(i, cents)| {
            Medicine::new(i as i64 + 1, format!("medicine-{}", i + 1), Decimal::new(i64::from(*cents), 2))
        })
        .collect()
}

fn requests_strategy() -> impl Strategy<Value = Vec<CreateOrderLineRequest>> {
    // ids 1..=12 against catalogues of up to 8 entries, so some lines miss
    prop::collection::vec((1i64..=12, 1i32..50), 0..15).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, count)| CreateOrderLineRequest::new(id, count))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_one_basket_per_matched_request(
        prices in prop::collection::vec(0u32..100_000, 1..8),
        requests in requests_strategy(),
        order_id in 1i64..1_000_000,
    ) {
        let medicines = catalogue(&prices);
        let baskets = build_basket_lines(&medicines, &requests, order_id);

        let matched = requests
            .iter()
            .filter(|r| medicines.iter().any(|m| m.id == r.medicine_id))
            .count();
        prop_assert_eq!(baskets.len(), matched);

        for basket in &baskets {
            let medicine = medicines.iter().find(|m| m.id == basket.medicine_id).unwrap();
            prop_assert_eq!(basket.price, medicine.price * Decimal::from(basket.count));
            prop_assert_eq!(basket.order_id, order_id);
        }
    }

    #[test]
    fn test_baskets_are_medicine_major(
        prices in prop::collection::vec(0u32..100_000, 1..8),
        requests in requests_strategy(),
    ) {
        let medicines = catalogue(&prices);
        let baskets = build_basket_lines(&medicines, &requests, 1);

        // catalogue ids ascend, so medicine-major output has non-decreasing ids
        let ids: Vec<i64> = baskets.iter().map(|b| b.medicine_id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn test_basket_prices_sum_to_order_total(
        prices in prop::collection::vec(0u32..100_000, 1..8),
        requests in requests_strategy(),
    ) {
        let medicines = catalogue(&prices);
        let baskets = build_basket_lines(&medicines, &requests, 1);

        let basket_total: Decimal = baskets.iter().map(|b| b.price).sum();
        prop_assert_eq!(basket_total, compute_total_price(&medicines, &requests));
    }
}

#[test]
fn test_request_order_kept_within_one_medicine() {
    let medicines = vec![Medicine::new(3, "Cetirizine", dec!(4.20))];
    let requests = [
        CreateOrderLineRequest::new(3, 5),
        CreateOrderLineRequest::new(3, 1),
    ];

    let baskets = build_basket_lines(&medicines, &requests, 8);

    let counts: Vec<i32> = baskets.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![5, 1]);
    assert_eq!(baskets[0].price, dec!(21.00));
}

#[test]
fn test_unknown_medicine_yields_no_basket() {
    let medicines = vec![Medicine::new(3, "Cetirizine", dec!(4.20))];
    let requests = [CreateOrderLineRequest::new(4, 5)];

    assert!(build_basket_lines(&medicines, &requests, 8).is_empty());
}
