//! Checkout Session Builder
//!
//! Re-derives authoritative pricing and display data from the catalog for
//! each client-declared line, all-or-nothing, then requests one embedded
//! payment session from the provider. No partial session is ever created:
//! any validation failure aborts before the provider call.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::CheckoutError;
use super::models::{CheckoutLineRequest, CheckoutSession, LineItem, PriceData, ProductData, CURRENCY};
use crate::catalog::Catalog;
use crate::payments::PaymentProvider;

/// Separator between the base description and the size/color qualifiers.
const QUALIFIER_SEPARATOR: &str = " | ";

/// Converts a natural-unit price to integer minor units (cents).
///
/// Rounding happens here, once, so no floating-point drift reaches the
/// provider. Returns `None` when the amount does not fit an `i64`.
pub fn to_minor_units(price: Decimal) -> Option<i64> {
    (price * Decimal::ONE_HUNDRED).round().to_i64()
}

/// Joins the product description with `Size: X` / `Color: Y` qualifiers.
/// Absent qualifiers are omitted, so no dangling separators appear when
/// only one of size/color is present.
fn describe_selection(description: &str, size: Option<&str>, color: Option<&str>) -> String {
    let mut parts = vec![description.to_string()];
    if let Some(size) = size {
        parts.push(format!("Size: {size}"));
    }
    if let Some(color) = color {
        parts.push(format!("Color: {color}"));
    }
    parts.join(QUALIFIER_SEPARATOR)
}

/// Derives priced line items from client-declared requests.
///
/// Every request line must name a catalog product and a positive
/// quantity; the first failure aborts the whole derivation.
pub fn build_line_items(
    catalog: &Catalog,
    requests: &[CheckoutLineRequest],
) -> Result<Vec<LineItem>, CheckoutError> {
    if requests.is_empty() {
        return Err(CheckoutError::Empty);
    }

    requests
        .iter()
        .map(|request| {
            let product = catalog
                .get(&request.product_id)
                .ok_or_else(|| CheckoutError::ProductNotFound(request.product_id.clone()))?;

            if request.quantity <= 0 {
                return Err(CheckoutError::InvalidQuantity {
                    product_id: request.product_id.clone(),
                    quantity: request.quantity,
                });
            }

            let unit_amount = to_minor_units(product.price)
                .ok_or_else(|| CheckoutError::InvalidPrice(product.id.clone()))?;

            Ok(LineItem {
                price_data: PriceData {
                    currency: CURRENCY.to_string(),
                    unit_amount,
                    product_data: ProductData {
                        name: product.name.clone(),
                        description: describe_selection(
                            &product.description,
                            request.size.as_deref(),
                            request.color.as_deref(),
                        ),
                    },
                },
                quantity: request.quantity as u64,
            })
        })
        .collect()
}

/// Builds line items from the catalog and requests one embedded payment
/// session from the provider. Validation failures return before the
/// provider is contacted.
pub async fn create_checkout_session(
    catalog: &Catalog,
    payments: &dyn PaymentProvider,
    requests: &[CheckoutLineRequest],
) -> Result<CheckoutSession, CheckoutError> {
    let line_items = build_line_items(catalog, requests)?;
    Ok(payments.create_embedded_session(&line_items).await?)
}
