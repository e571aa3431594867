use std::sync::Arc;

use tracing::{info, instrument};

use pokedex_error::anyhow;

use crate::{
    env::Env,
    service::PokemonService,
    store::{MemoryPokemonStore, PokemonStore},
};

/// Application state for dependency injection.
///
/// Construction wires the lookup service from an injected store, so tests can
/// substitute a fake without any framework support.
#[derive(Clone)]
pub struct AppState {
    pub service: PokemonService,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PokemonStore>) -> Self {
        Self {
            service: PokemonService::new(store),
        }
    }
}

/// Builds production state: an in-memory store loaded from the `POKEDEX_SEED`
/// file when configured, otherwise from the built-in seed.
#[instrument(err)]
pub fn create_production_state() -> anyhow::Result<AppState> {
    let store = match Env::pokedex_seed() {
        Some(path) => MemoryPokemonStore::from_seed_file(path)?,
        None => MemoryPokemonStore::with_default_seed(),
    };

    info!(records = store.len(), "Loaded Pokedex entity store");

    Ok(AppState::new(Arc::new(store)))
}
