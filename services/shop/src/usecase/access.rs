use shop_domain::id::OrderId;

use crate::domain::repository::OrderRepository;
use crate::domain::types::{Order, OrderView};
use crate::error::ShopServiceError;
use crate::usecase::passcode;

/// Check a presented passcode against the order's stored hash.
///
/// A missing hash is an integrity failure, not an auth failure: every order
/// this service creates carries one.
pub async fn authorize(order: &Order, presented: &str) -> Result<(), ShopServiceError> {
    let hash = order
        .passcode_hash
        .as_deref()
        .ok_or(ShopServiceError::MissingPasscodeHash)?;
    if passcode::verify(presented, hash).await? {
        Ok(())
    } else {
        Err(ShopServiceError::InvalidPasscode)
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> GetOrderUseCase<O> {
    pub async fn execute(
        &self,
        order_id: &OrderId,
        presented_passcode: &str,
    ) -> Result<OrderView, ShopServiceError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(ShopServiceError::OrderNotFound)?;

        authorize(&order, presented_passcode).await?;

        let items = self.orders.list_line_items(&order.id).await?;
        Ok(OrderView {
            order: order.without_passcode(),
            items,
        })
    }
}
