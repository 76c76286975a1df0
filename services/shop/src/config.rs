use serde::Deserialize;

use shop_core::config::Config;

/// Shop service configuration loaded from environment variables.
#[derive(Deserialize)]
pub struct ShopConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Shared secret expected verbatim in the `Authorization` header of admin
    /// requests. Env var: `ADMIN_SECRET`.
    pub admin_secret: String,
    /// TCP port to listen on (default 8080). Env var: `SHOP_PORT`.
    #[serde(default = "default_port")]
    pub shop_port: u16,
    /// Apply pending migrations at startup (default true). Env var: `AUTO_MIGRATE`.
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

impl Config for ShopConfig {}

fn default_port() -> u16 {
    8080
}

fn default_auto_migrate() -> bool {
    true
}

impl std::fmt::Debug for ShopConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopConfig")
            .field("database_url", &"***")
            .field("admin_secret", &"***")
            .field("shop_port", &self.shop_port)
            .field("auto_migrate", &self.auto_migrate)
            .finish()
    }
}
