//! Order pricing and basket construction.
//!
//! Both functions join the resolved medicines against the requested lines
//! medicine-major: the outer loop walks `medicines`, the inner loop walks
//! `requests`. A request whose medicine was not resolved matches nothing and
//! therefore adds neither price nor a basket line. Duplicate requests for the
//! same medicine are priced independently.

use rust_decimal::Decimal;

use crate::modules::medicines::models::Medicine;
use crate::modules::orders::models::{CreateOrderLineRequest, NewBasket};

/// Price of `count` units of `medicine`
pub fn line_price(medicine: &Medicine, count: i32) -> Decimal {
    medicine.price * Decimal::from(count)
}

/// Sum of `price × count` over every (medicine, request) pair with matching ids
pub fn compute_total_price(medicines: &[Medicine], requests: &[CreateOrderLineRequest]) -> Decimal {
    let mut total = Decimal::ZERO;

    for medicine in medicines {
        for request in requests {
            if request.medicine_id == medicine.id {
                total += line_price(medicine, request.count);
            }
        }
    }

    total
}

/// One unsaved basket per matched (medicine, request) pair, owned by `order_id`
pub fn build_basket_lines(
    medicines: &[Medicine],
    requests: &[CreateOrderLineRequest],
    order_id: i64,
) -> Vec<NewBasket> {
    let mut baskets = Vec::new();

    for medicine in medicines {
        for request in requests {
            if request.medicine_id != medicine.id {
                continue;
            }

            baskets.push(NewBasket {
                order_id,
                medicine_id: request.medicine_id,
                count: request.count,
                price: line_price(medicine, request.count),
            });
        }
    }

    baskets
}
