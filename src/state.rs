use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::registry::UserRegistry;
use crate::catalog::store::Catalog;
use crate::config::AppConfig;

/// Shared application state. The catalog sits behind an RwLock because the
/// runtime is multi-threaded: reads may overlap, mutations may not.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub users: Arc<UserRegistry>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            catalog: Arc::new(RwLock::new(Catalog::seeded())),
            users: Arc::new(UserRegistry::seeded()?),
            config: Arc::new(config),
        })
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with(true)
    }

    /// Fresh state for handler tests; `require_auth` selects the variant.
    #[cfg(test)]
    pub fn fake_with(require_auth: bool) -> Self {
        let config = AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            jwt: crate::config::JwtConfig {
                secret: "test-secret".into(),
                ttl_minutes: 5,
            },
            require_auth,
        };
        Self::init(config).expect("fake state")
    }
}
