use axum::extract::FromRequest;

use crate::error::ShopServiceError;

pub mod checkout;
pub mod health;
pub mod order;
pub mod product;

/// `axum::Json` whose rejections surface as [`ShopServiceError::MalformedBody`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ShopServiceError))]
pub struct ApiJson<T>(pub T);
