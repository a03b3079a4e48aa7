//! Shared application state for the web server.

use std::sync::Arc;
use techroad_catalog::{Catalog, StaticCatalog};
use techroad_common::{Config, Result};

use crate::templates::Templates;

/// Shared state injected into every Axum handler. Immutable after startup.
pub struct AppState {
    pub config: Config,
    pub templates: Templates,
    pub catalog: Box<dyn Catalog>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_catalog(config, Box::new(StaticCatalog))
    }

    pub fn with_catalog(config: Config, catalog: Box<dyn Catalog>) -> Result<Self> {
        let templates = Templates::new(&config.site.name)?;
        Ok(Self { config, templates, catalog })
    }
}

pub type SharedState = Arc<AppState>;
