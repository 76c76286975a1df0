use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shop_domain::id::OrderId;

use crate::domain::types::{Order, OrderLineItem, OrderView};
use crate::error::ShopServiceError;
use crate::handlers::ApiJson;
use crate::state::AppState;
use crate::usecase::access::GetOrderUseCase;
use crate::usecase::confirm::{ConfirmOrderInput, ConfirmOrderUseCase};

/// Order header and line items as clients see them. Never carries the passcode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub email: String,
    pub address: String,
    pub grand_total: i64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "shop_core::serde::to_rfc3339_ms_opt"
    )]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_account_number: Option<String>,
    pub detail: Vec<OrderDetailResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub price: i64,
    pub total: i64,
}

impl From<OrderLineItem> for OrderDetailResponse {
    fn from(item: OrderLineItem) -> Self {
        Self {
            id: item.id.into(),
            order_id: item.order_id.into(),
            product_id: item.product_id.into(),
            quantity: item.quantity,
            price: item.price,
            total: item.total,
        }
    }
}

impl OrderResponse {
    pub fn new(order: Order, items: Vec<OrderLineItem>) -> Self {
        let (paid_at, paid_bank, paid_account_number) = match order.payment {
            Some(p) => (Some(p.paid_at), Some(p.bank), Some(p.account_number)),
            None => (None, None, None),
        };
        Self {
            id: order.id.into(),
            email: order.email,
            address: order.address,
            grand_total: order.grand_total,
            paid_at,
            paid_bank,
            paid_account_number,
            detail: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(view: OrderView) -> Self {
        Self::new(view.order, view.items)
    }
}

// ── GET /api/v1/orders/{id}?passcode= ────────────────────────────────────────

#[derive(Deserialize)]
pub struct PasscodeQuery {
    #[serde(default)]
    pub passcode: String,
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PasscodeQuery>,
) -> Result<Json<OrderResponse>, ShopServiceError> {
    let usecase = GetOrderUseCase {
        orders: state.order_repo(),
    };
    let view = usecase.execute(&OrderId(id), &query.passcode).await?;
    Ok(Json(view.into()))
}

// ── POST /api/v1/orders/{id}/confirm ─────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOrderRequest {
    pub amount: i64,
    pub bank: String,
    pub account_number: String,
    pub passcode: String,
}

pub async fn confirm_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<ConfirmOrderRequest>,
) -> Result<Json<OrderResponse>, ShopServiceError> {
    let usecase = ConfirmOrderUseCase {
        orders: state.order_repo(),
    };
    let view = usecase
        .execute(ConfirmOrderInput {
            order_id: OrderId(id),
            passcode: body.passcode,
            amount: body.amount,
            bank: body.bank,
            account_number: body.account_number,
        })
        .await?;
    Ok(Json(view.into()))
}
