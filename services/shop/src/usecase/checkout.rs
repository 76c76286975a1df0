use crate::domain::repository::{OrderRepository, ProductRepository};
use crate::domain::types::{CheckoutLine, Order, OrderLineItem};
use crate::error::ShopServiceError;
use crate::usecase::assembly::{assemble_order, validate_checkout};
use crate::usecase::passcode;
use crate::usecase::pricing::resolve_prices;

pub struct CheckoutInput {
    pub email: String,
    pub address: String,
    pub lines: Vec<CheckoutLine>,
}

#[derive(Debug)]
pub struct CheckoutOutput {
    /// Persisted order; `passcode_hash` already stripped.
    pub order: Order,
    pub items: Vec<OrderLineItem>,
    /// Plaintext passcode. Returned here and nowhere else.
    pub passcode: String,
}

pub struct CheckoutUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub products: P,
    pub orders: O,
}

impl<P, O> CheckoutUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub async fn execute(&self, input: CheckoutInput) -> Result<CheckoutOutput, ShopServiceError> {
        // 1. Shape checks → 400
        let checkout = validate_checkout(&input.email, &input.address, input.lines)?;

        // 2. Authoritative prices → 404 if any product is unknown
        let products = resolve_prices(&self.products, &checkout.lines).await?;

        // 3. Passcode + hash
        let issued = passcode::issue().await?;

        // 4. Totals (checked) and ids
        let (order, items) = assemble_order(&checkout, &products, issued.hash)?;

        // 5. Header + lines in one transaction
        self.orders.create(&order, &items).await?;

        tracing::info!(
            order_id = %order.id,
            lines = items.len(),
            grand_total = order.grand_total,
            "order created"
        );

        Ok(CheckoutOutput {
            order: order.without_passcode(),
            items,
            passcode: issued.plaintext,
        })
    }
}
