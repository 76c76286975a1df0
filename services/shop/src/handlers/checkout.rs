use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use shop_domain::id::ProductId;

use crate::domain::types::CheckoutLine;
use crate::error::ShopServiceError;
use crate::handlers::ApiJson;
use crate::handlers::order::OrderResponse;
use crate::state::AppState;
use crate::usecase::checkout::{CheckoutInput, CheckoutUseCase};

// ── POST /api/v1/checkout ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub email: String,
    pub address: String,
    pub products: Vec<CheckoutProduct>,
}

#[derive(Deserialize)]
pub struct CheckoutProduct {
    pub id: String,
    pub quantity: i32,
}

/// The created order plus the plaintext passcode. The only response that
/// ever carries it.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub passcode: String,
}

pub async fn checkout(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>), ShopServiceError> {
    let usecase = CheckoutUseCase {
        products: state.product_repo(),
        orders: state.order_repo(),
    };
    let output = usecase
        .execute(CheckoutInput {
            email: body.email,
            address: body.address,
            lines: body
                .products
                .into_iter()
                .map(|p| CheckoutLine {
                    product_id: ProductId(p.id),
                    quantity: p.quantity,
                })
                .collect(),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            order: OrderResponse::new(output.order, output.items),
            passcode: output.passcode,
        }),
    ))
}
