use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait, sea_query::Expr,
};

use shop_domain::id::{OrderDetailId, OrderId, ProductId};
use shop_schema::{order_details, orders, products};

use crate::domain::repository::{OrderRepository, ProductRepository};
use crate::domain::types::{Order, OrderLineItem, Payment, Product};
use crate::error::ShopServiceError;

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProductRepository for DbProductRepository {
    async fn list_active(&self) -> Result<Vec<Product>, ShopServiceError> {
        let models = products::Entity::find()
            .filter(products::Column::IsDeleted.eq(false))
            .order_by_asc(products::Column::Name)
            .all(self.db.as_ref())
            .await
            .context("list active products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_active_by_id(
        &self,
        id: &ProductId,
    ) -> Result<Option<Product>, ShopServiceError> {
        let model = products::Entity::find_by_id(id.as_str())
            .filter(products::Column::IsDeleted.eq(false))
            .one(self.db.as_ref())
            .await
            .context("find active product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn find_active_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, ShopServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = products::Entity::find()
            .filter(products::Column::IsDeleted.eq(false))
            .filter(products::Column::Id.is_in(ids.iter().map(|id| id.as_str())))
            .all(self.db.as_ref())
            .await
            .context("find active products by ids")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn create(&self, product: &Product) -> Result<(), ShopServiceError> {
        products::Entity::insert(products::ActiveModel {
            id: Set(product.id.to_string()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            is_deleted: Set(false),
        })
        .exec_without_returning(self.db.as_ref())
        .await
        .context("create product")?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<bool, ShopServiceError> {
        let result = products::Entity::update_many()
            .col_expr(products::Column::Name, Expr::value(product.name.clone()))
            .col_expr(products::Column::Price, Expr::value(product.price))
            .filter(products::Column::Id.eq(product.id.as_str()))
            .filter(products::Column::IsDeleted.eq(false))
            .exec(self.db.as_ref())
            .await
            .context("update product")?;
        Ok(result.rows_affected > 0)
    }

    async fn soft_delete(&self, id: &ProductId) -> Result<bool, ShopServiceError> {
        let result = products::Entity::update_many()
            .col_expr(products::Column::IsDeleted, Expr::value(true))
            .filter(products::Column::Id.eq(id.as_str()))
            .filter(products::Column::IsDeleted.eq(false))
            .exec(self.db.as_ref())
            .await
            .context("soft delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: ProductId(model.id),
        name: model.name,
        price: model.price,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OrderRepository for DbOrderRepository {
    async fn create(
        &self,
        order: &Order,
        items: &[OrderLineItem],
    ) -> Result<(), ShopServiceError> {
        let header = order_to_active_model(order);
        let details: Vec<order_details::ActiveModel> =
            items.iter().map(line_item_to_active_model).collect();

        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    orders::Entity::insert(header)
                        .exec_without_returning(txn)
                        .await?;
                    if !details.is_empty() {
                        order_details::Entity::insert_many(details)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create order with line items")?;
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, ShopServiceError> {
        let model = orders::Entity::find_by_id(id.as_str())
            .one(self.db.as_ref())
            .await
            .context("find order by id")?;
        model.map(order_from_model).transpose()
    }

    async fn list_line_items(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<OrderLineItem>, ShopServiceError> {
        let models = order_details::Entity::find()
            .filter(order_details::Column::OrderId.eq(order_id.as_str()))
            .all(self.db.as_ref())
            .await
            .context("list order line items")?;
        Ok(models.into_iter().map(line_item_from_model).collect())
    }

    async fn mark_paid(&self, id: &OrderId, payment: &Payment) -> Result<bool, ShopServiceError> {
        let result = orders::Entity::update_many()
            .col_expr(orders::Column::PaidAt, Expr::value(payment.paid_at))
            .col_expr(orders::Column::PaidBank, Expr::value(payment.bank.clone()))
            .col_expr(
                orders::Column::PaidAccountNumber,
                Expr::value(payment.account_number.clone()),
            )
            .filter(orders::Column::Id.eq(id.as_str()))
            .filter(orders::Column::PaidAt.is_null())
            .exec(self.db.as_ref())
            .await
            .context("mark order paid")?;
        Ok(result.rows_affected == 1)
    }
}

fn order_to_active_model(order: &Order) -> orders::ActiveModel {
    let payment = order.payment.as_ref();
    orders::ActiveModel {
        id: Set(order.id.to_string()),
        email: Set(order.email.clone()),
        address: Set(order.address.clone()),
        passcode: Set(order.passcode_hash.clone()),
        paid_at: Set(payment.map(|p| p.paid_at)),
        paid_bank: Set(payment.map(|p| p.bank.clone())),
        paid_account_number: Set(payment.map(|p| p.account_number.clone())),
        grand_total: Set(order.grand_total),
    }
}

fn line_item_to_active_model(item: &OrderLineItem) -> order_details::ActiveModel {
    order_details::ActiveModel {
        id: Set(item.id.to_string()),
        order_id: Set(item.order_id.to_string()),
        product_id: Set(item.product_id.to_string()),
        quantity: Set(item.quantity),
        price: Set(item.price),
        total: Set(item.total),
    }
}

/// The three payment columns must be all-null or all-set.
fn order_from_model(model: orders::Model) -> Result<Order, ShopServiceError> {
    let payment = match (model.paid_at, model.paid_bank, model.paid_account_number) {
        (None, None, None) => None,
        (Some(paid_at), Some(bank), Some(account_number)) => Some(Payment {
            paid_at,
            bank,
            account_number,
        }),
        _ => {
            tracing::error!(order_id = %model.id, "partially recorded payment");
            return Err(ShopServiceError::InconsistentPayment);
        }
    };
    Ok(Order {
        id: OrderId(model.id),
        email: model.email,
        address: model.address,
        grand_total: model.grand_total,
        passcode_hash: model.passcode,
        payment,
    })
}

fn line_item_from_model(model: order_details::Model) -> OrderLineItem {
    OrderLineItem {
        id: OrderDetailId(model.id),
        order_id: OrderId(model.order_id),
        product_id: ProductId(model.product_id),
        quantity: model.quantity,
        price: model.price,
        total: model.total,
    }
}
