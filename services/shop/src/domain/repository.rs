#![allow(async_fn_in_trait)]

use shop_domain::id::{OrderId, ProductId};

use crate::domain::types::{Order, OrderLineItem, Payment, Product};
use crate::error::ShopServiceError;

/// Catalog store. Every read excludes soft-deleted products.
pub trait ProductRepository: Send + Sync {
    async fn list_active(&self) -> Result<Vec<Product>, ShopServiceError>;

    async fn find_active_by_id(&self, id: &ProductId)
    -> Result<Option<Product>, ShopServiceError>;

    /// One batched lookup; unknown or deleted ids are simply absent from the result.
    async fn find_active_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, ShopServiceError>;

    async fn create(&self, product: &Product) -> Result<(), ShopServiceError>;

    /// Overwrite name and price of an active product. Returns `false` if no
    /// active product has this id.
    async fn update(&self, product: &Product) -> Result<bool, ShopServiceError>;

    /// Returns `false` if no active product has this id.
    async fn soft_delete(&self, id: &ProductId) -> Result<bool, ShopServiceError>;
}

/// Order store.
pub trait OrderRepository: Send + Sync {
    /// Insert the header and all line items in one transaction. On any failure
    /// nothing is persisted.
    async fn create(
        &self,
        order: &Order,
        items: &[OrderLineItem],
    ) -> Result<(), ShopServiceError>;

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, ShopServiceError>;

    /// Line items in unspecified order.
    async fn list_line_items(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<OrderLineItem>, ShopServiceError>;

    /// Record payment only while the order is still unpaid (compare-and-set on
    /// `paid_at IS NULL`). Returns `false` when nothing was updated.
    async fn mark_paid(&self, id: &OrderId, payment: &Payment) -> Result<bool, ShopServiceError>;
}
