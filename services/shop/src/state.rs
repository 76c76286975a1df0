use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use shop_auth_types::admin::AdminSecret;

use crate::infra::db::{DbOrderRepository, DbProductRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub admin_secret: AdminSecret,
}

impl AppState {
    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: Arc::clone(&self.db),
        }
    }
}

impl FromRef<AppState> for AdminSecret {
    fn from_ref(state: &AppState) -> Self {
        state.admin_secret.clone()
    }
}
