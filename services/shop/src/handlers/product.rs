use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use shop_auth_types::admin::AdminOnly;
use shop_domain::id::ProductId;

use crate::domain::types::Product;
use crate::error::ShopServiceError;
use crate::handlers::ApiJson;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductInput, UpdateProductUseCase,
};

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.into(),
            name: p.name,
            price: p.price,
        }
    }
}

// ── GET /api/v1/products ─────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ShopServiceError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

// ── GET /api/v1/products/{id} ────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ShopServiceError> {
    let usecase = GetProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase.execute(&ProductId(id)).await?;
    Ok(Json(product.into()))
}

// ── POST /admin/products ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
}

pub async fn create_product(
    _admin: AdminOnly,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ShopServiceError> {
    let usecase = CreateProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase
        .execute(CreateProductInput {
            name: body.name,
            price: body.price,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// ── PUT /admin/products/{id} ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
}

pub async fn update_product(
    _admin: AdminOnly,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ShopServiceError> {
    let usecase = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase
        .execute(
            &ProductId(id),
            UpdateProductInput {
                name: body.name,
                price: body.price,
            },
        )
        .await?;
    Ok(Json(product.into()))
}

// ── DELETE /admin/products/{id} ──────────────────────────────────────────────

pub async fn delete_product(
    _admin: AdminOnly,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ShopServiceError> {
    let usecase = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(&ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
