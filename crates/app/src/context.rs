//! App Context

use std::sync::Arc;

use salesdesk::{
    catalog::Catalog,
    fixtures::{Fixture, FixtureError, default_catalog, default_locations},
    locations::LocationTable,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    auth::{AuthService, AuthServiceError, InMemoryAuthService, SessionStore, UserStore},
    config::AppConfig,
    domain::{
        orders::{InMemoryOrdersService, OrdersService},
        products::{InMemoryProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load fixtures")]
    Fixture(#[from] FixtureError),

    #[error("failed to restore session")]
    Auth(#[from] AuthServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub catalog: Arc<Catalog>,
    pub locations: Arc<LocationTable>,
}

impl AppContext {
    /// Build the application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when fixtures cannot be loaded or a saved session cannot be read.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let (catalog, locations) = match &config.fixtures_dir {
            Some(dir) => {
                debug!(dir = %dir.display(), "loading fixtures");

                let fixture = Fixture::with_base_path(dir);

                (fixture.load_catalog("catalog")?, fixture.load_locations("locations")?)
            }
            None => (default_catalog()?, default_locations()?),
        };

        let auth = InMemoryAuthService::new(
            UserStore::seeded(),
            SessionStore::new(&config.session_dir),
            config.auth_latency(),
        )?;

        Ok(Self {
            auth: Arc::new(auth),
            products: Arc::new(InMemoryProductsService::from_catalog(&catalog)),
            orders: Arc::new(InMemoryOrdersService::default()),
            catalog: Arc::new(catalog),
            locations: Arc::new(locations),
        })
    }
}
