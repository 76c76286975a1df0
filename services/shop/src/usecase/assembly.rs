use std::collections::{HashMap, HashSet};

use shop_domain::email::Email;
use shop_domain::id::{OrderDetailId, OrderId, ProductId};

use crate::domain::types::{CheckoutLine, Order, OrderLineItem, Product};
use crate::error::ShopServiceError;

/// A checkout request whose shape has been validated.
#[derive(Debug, Clone)]
pub struct ValidatedCheckout {
    pub email: Email,
    pub address: String,
    pub lines: Vec<CheckoutLine>,
}

/// Reject malformed checkouts before touching storage.
pub fn validate_checkout(
    email: &str,
    address: &str,
    lines: Vec<CheckoutLine>,
) -> Result<ValidatedCheckout, ShopServiceError> {
    let email = Email::parse(email)?;
    let address = address.trim();
    if address.is_empty() {
        return Err(ShopServiceError::InvalidAddress);
    }
    if lines.is_empty() {
        return Err(ShopServiceError::EmptyOrder);
    }
    let mut seen = HashSet::with_capacity(lines.len());
    for line in &lines {
        if !line.product_id.is_well_formed() {
            return Err(ShopServiceError::InvalidProduct);
        }
        if line.quantity <= 0 {
            return Err(ShopServiceError::InvalidQuantity);
        }
        if !seen.insert(&line.product_id) {
            return Err(ShopServiceError::DuplicateProduct);
        }
    }
    Ok(ValidatedCheckout {
        email,
        address: address.to_owned(),
        lines,
    })
}

/// Build an unpaid order and its line items from resolved prices.
///
/// Line items follow the request order. Totals use checked arithmetic;
/// overflow fails the whole checkout with `TotalOverflow`.
pub fn assemble_order(
    checkout: &ValidatedCheckout,
    products: &[Product],
    passcode_hash: String,
) -> Result<(Order, Vec<OrderLineItem>), ShopServiceError> {
    let prices: HashMap<&ProductId, i64> = products.iter().map(|p| (&p.id, p.price)).collect();
    let order_id = OrderId::generate();

    let mut grand_total: i64 = 0;
    let mut items = Vec::with_capacity(checkout.lines.len());
    for line in &checkout.lines {
        let price = *prices
            .get(&line.product_id)
            .ok_or(ShopServiceError::ProductNotFound)?;
        let total = price
            .checked_mul(i64::from(line.quantity))
            .ok_or(ShopServiceError::TotalOverflow)?;
        grand_total = grand_total
            .checked_add(total)
            .ok_or(ShopServiceError::TotalOverflow)?;
        items.push(OrderLineItem {
            id: OrderDetailId::generate(),
            order_id: order_id.clone(),
            product_id: line.product_id.clone(),
            quantity: line.quantity,
            price,
            total,
        });
    }

    let order = Order {
        id: order_id,
        email: checkout.email.to_string(),
        address: checkout.address.clone(),
        grand_total,
        passcode_hash: Some(passcode_hash),
        payment: None,
    };
    Ok((order, items))
}
