use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::db::{Store, seed_if_empty};
use crate::services::{MovieService, SeaOrmMovieService};

/// Everything a request handler or CLI command needs, built once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub movie_service: Arc<dyn MovieService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await
        .with_context(|| format!("Failed to open database {}", config.general.database_path))?;

        if config.general.seed_on_empty {
            let seeded = seed_if_empty(&store)
                .await
                .context("Failed to seed example movies")?;
            if seeded == 0 {
                info!("Catalogue already populated, skipping seed");
            }
        }

        let movie_service: Arc<dyn MovieService> = Arc::new(SeaOrmMovieService::new(
            store.clone(),
            config.search.literal_wildcards,
        ));

        Ok(Self {
            config: Arc::new(config),
            store,
            movie_service,
        })
    }
}
