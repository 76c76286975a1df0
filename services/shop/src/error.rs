use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use shop_domain::email::InvalidEmail;

/// Shop service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ShopServiceError {
    // ── validation (400) ──
    #[error("malformed request body")]
    MalformedBody,
    #[error("invalid email")]
    InvalidEmail,
    #[error("address is required")]
    InvalidAddress,
    #[error("order has no products")]
    EmptyOrder,
    #[error("quantity must be a positive integer")]
    InvalidQuantity,
    #[error("product listed more than once")]
    DuplicateProduct,
    #[error("order total out of range")]
    TotalOverflow,
    #[error("bank and account number are required")]
    InvalidPayment,
    #[error("invalid product")]
    InvalidProduct,
    #[error("missing data")]
    MissingData,

    // ── not found (404) ──
    #[error("product not found")]
    ProductNotFound,
    #[error("order not found")]
    OrderNotFound,

    // ── auth (401) ──
    #[error("invalid passcode")]
    InvalidPasscode,

    // ── conflict (400) ──
    #[error("order already paid")]
    AlreadyPaid,
    #[error("payment amount does not match order total")]
    AmountMismatch,

    // ── integrity (500) ──
    #[error("order has no passcode")]
    MissingPasscodeHash,
    #[error("order payment fields are inconsistent")]
    InconsistentPayment,
    #[error("order passcode hash is unreadable")]
    UnreadablePasscodeHash,

    // ── storage (500) ──
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ShopServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedBody => "MALFORMED_BODY",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidAddress => "INVALID_ADDRESS",
            Self::EmptyOrder => "EMPTY_ORDER",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::DuplicateProduct => "DUPLICATE_PRODUCT",
            Self::TotalOverflow => "TOTAL_OVERFLOW",
            Self::InvalidPayment => "INVALID_PAYMENT",
            Self::InvalidProduct => "INVALID_PRODUCT",
            Self::MissingData => "MISSING_DATA",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::InvalidPasscode => "INVALID_PASSCODE",
            Self::AlreadyPaid => "ALREADY_PAID",
            Self::AmountMismatch => "AMOUNT_MISMATCH",
            Self::MissingPasscodeHash => "MISSING_PASSCODE_HASH",
            Self::InconsistentPayment => "INCONSISTENT_PAYMENT",
            Self::UnreadablePasscodeHash => "UNREADABLE_PASSCODE_HASH",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody
            | Self::InvalidEmail
            | Self::InvalidAddress
            | Self::EmptyOrder
            | Self::InvalidQuantity
            | Self::DuplicateProduct
            | Self::TotalOverflow
            | Self::InvalidPayment
            | Self::InvalidProduct
            | Self::MissingData
            | Self::AlreadyPaid
            | Self::AmountMismatch => StatusCode::BAD_REQUEST,
            Self::ProductNotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::InvalidPasscode => StatusCode::UNAUTHORIZED,
            Self::MissingPasscodeHash
            | Self::InconsistentPayment
            | Self::UnreadablePasscodeHash
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidEmail> for ShopServiceError {
    fn from(_: InvalidEmail) -> Self {
        Self::InvalidEmail
    }
}

impl From<JsonRejection> for ShopServiceError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::MalformedBody
    }
}

impl IntoResponse for ShopServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 500s only; TraceLayer records every request.
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
            }
            Self::MissingPasscodeHash
            | Self::InconsistentPayment
            | Self::UnreadablePasscodeHash => {
                tracing::error!(kind = self.kind(), "order integrity violation");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
