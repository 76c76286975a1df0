use chrono::{DateTime, Utc};

use shop_domain::id::{OrderDetailId, OrderId, ProductId};

/// Passcode length in characters.
pub const PASSCODE_LEN: usize = 5;

/// Longest product name the `products.name` column holds.
pub const MAX_PRODUCT_NAME_LEN: usize = 255;

/// Longest bank / account number the `orders.paid_*` columns hold.
pub const MAX_PAYMENT_FIELD_LEN: usize = 255;

/// Active catalog product. Soft-deleted rows never leave the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Minor currency units.
    pub price: i64,
}

/// Payment details asserted by the customer. All three are recorded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub paid_at: DateTime<Utc>,
    pub bank: String,
    pub account_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Created,
    Paid,
}

/// Order header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub email: String,
    pub address: String,
    pub grand_total: i64,
    /// Argon2 PHC string. `None` only on malformed legacy rows.
    pub passcode_hash: Option<String>,
    pub payment: Option<Payment>,
}

impl Order {
    pub fn state(&self) -> OrderState {
        if self.payment.is_some() {
            OrderState::Paid
        } else {
            OrderState::Created
        }
    }

    pub fn is_paid(&self) -> bool {
        self.state() == OrderState::Paid
    }

    /// Drop the passcode hash before the order leaves the service.
    pub fn without_passcode(self) -> Self {
        Self {
            passcode_hash: None,
            ..self
        }
    }
}

/// One purchased product within an order. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineItem {
    pub id: OrderDetailId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    /// Unit price snapshotted at checkout.
    pub price: i64,
    pub total: i64,
}

/// One requested `(product, quantity)` pair of a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLine {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Order header plus its line items, passcode stripped.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order: Order,
    pub items: Vec<OrderLineItem>,
}
