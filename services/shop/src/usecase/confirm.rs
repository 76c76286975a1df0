use chrono::{SubsecRound, Utc};

use shop_domain::id::OrderId;

use crate::domain::repository::OrderRepository;
use crate::domain::types::{MAX_PAYMENT_FIELD_LEN, Order, OrderView, Payment};
use crate::error::ShopServiceError;
use crate::usecase::access::authorize;

pub struct ConfirmOrderInput {
    pub order_id: OrderId,
    pub passcode: String,
    pub amount: i64,
    pub bank: String,
    pub account_number: String,
}

/// Moves an order from `Created` to `Paid`.
///
/// The customer's claim is trusted as-is apart from the amount, which must
/// equal the stored grand total exactly.
pub struct ConfirmOrderUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> ConfirmOrderUseCase<O> {
    pub async fn execute(&self, input: ConfirmOrderInput) -> Result<OrderView, ShopServiceError> {
        let bank = input.bank.trim();
        let account_number = input.account_number.trim();
        if !is_payment_field(bank) || !is_payment_field(account_number) {
            return Err(ShopServiceError::InvalidPayment);
        }

        // 1. Load → 404
        let order = self
            .orders
            .find_by_id(&input.order_id)
            .await?
            .ok_or(ShopServiceError::OrderNotFound)?;

        // 2-3. Hash present (else 500) and passcode matches (else 401)
        authorize(&order, &input.passcode).await?;

        // 4. Still unpaid
        if order.is_paid() {
            return Err(ShopServiceError::AlreadyPaid);
        }

        // 5. Exact amount
        if input.amount != order.grand_total {
            return Err(ShopServiceError::AmountMismatch);
        }

        // 6. Conditional write; a concurrent confirmation that landed first
        //    leaves zero rows to update.
        let payment = Payment {
            paid_at: Utc::now().trunc_subsecs(6),
            bank: bank.to_owned(),
            account_number: account_number.to_owned(),
        };
        if !self.orders.mark_paid(&order.id, &payment).await? {
            return Err(ShopServiceError::AlreadyPaid);
        }

        // 7. Paid order + line items, passcode stripped
        let items = self.orders.list_line_items(&order.id).await?;
        tracing::info!(order_id = %order.id, "order confirmed");
        Ok(OrderView {
            order: Order {
                payment: Some(payment),
                ..order
            }
            .without_passcode(),
            items,
        })
    }
}

fn is_payment_field(value: &str) -> bool {
    !value.is_empty() && value.len() <= MAX_PAYMENT_FIELD_LEN
}
