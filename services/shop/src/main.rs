use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use shop::config::ShopConfig;
use shop::router::build_router;
use shop::state::AppState;
use shop_auth_types::admin::AdminSecret;
use shop_core::config::Config;
use shop_core::tracing::init_tracing;
use shop_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ShopConfig::from_env().context("load configuration from environment")?;

    let admin_secret = AdminSecret::new(config.admin_secret);
    if !admin_secret.is_configured() {
        tracing::warn!("ADMIN_SECRET is empty; admin endpoints will answer 500");
    }

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .context("apply database migrations")?;
        info!("database migrations applied");
    }

    let state = AppState {
        db: Arc::new(db),
        admin_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.shop_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("shop service listening on {addr}");
    axum::serve(listener, router).await.context("serve http")?;
    Ok(())
}
