// Tests for page/rowsPerPage → LIMIT/OFFSET translation

use proptest::prelude::*;

use pharmacy_api::core::pagination::{DEFAULT_ROWS_PER_PAGE, MAX_ROWS_PER_PAGE};
use pharmacy_api::core::{PageQuery, PageWindow};

#[test]
fn test_page_one_starts_at_zero() {
    let window = PageQuery::new(Some(1), Some(10)).window().unwrap();
    assert_eq!(window, PageWindow { limit: 10, offset: 0 });
}

#[test]
fn test_page_three_skips_twenty_rows() {
    let window = PageQuery::new(Some(3), Some(10)).window().unwrap();
    assert_eq!(window, PageWindow { limit: 10, offset: 20 });
}

#[test]
fn test_page_zero_is_treated_as_first_page() {
    let window = PageQuery::new(Some(0), Some(10)).window().unwrap();
    assert_eq!(window.offset, 0);
}

#[test]
fn test_missing_rows_per_page_uses_default_and_ignores_page() {
    let window = PageQuery::new(Some(5), None).window().unwrap();
    assert_eq!(
        window,
        PageWindow {
            limit: DEFAULT_ROWS_PER_PAGE,
            offset: 0
        }
    );
}

#[test]
fn test_missing_page_defaults_to_first_page() {
    let window = PageQuery::new(None, Some(25)).window().unwrap();
    assert_eq!(window, PageWindow { limit: 25, offset: 0 });
}

#[test]
fn test_oversized_page_is_capped() {
    let window = PageQuery::new(Some(2), Some(5_000)).window().unwrap();
    assert_eq!(window.limit, MAX_ROWS_PER_PAGE);
    assert_eq!(window.offset, u64::from(MAX_ROWS_PER_PAGE));
}

proptest! {
    /// Property: offset = (page - 1) × rowsPerPage for pages >= 1
    #[test]
    fn test_offset_formula(page in 1u32..10_000, rows in 1u32..=MAX_ROWS_PER_PAGE) {
        let window = PageQuery::new(Some(page), Some(rows)).window().unwrap();
        prop_assert_eq!(window.limit, rows);
        prop_assert_eq!(window.offset, u64::from(page - 1) * u64::from(rows));
    }
}
