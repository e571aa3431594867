// Test router helpers for integration testing

use std::sync::Arc;

use axum::Router;

use pokedex_backend::{
    router::create_router_with_state,
    state::AppState,
    store::{MemoryPokemonStore, PokemonRecord, PokemonStore},
};

/// Creates the full production router backed by an in-memory store holding
/// exactly the given records.
pub fn create_test_router(records: impl IntoIterator<Item = PokemonRecord>) -> Router {
    create_test_router_with_store(Arc::new(MemoryPokemonStore::new(records)))
}

/// Creates the full production router with an arbitrary injected store, for
/// scenarios that need a fake (e.g. a faulting store).
pub fn create_test_router_with_store(store: Arc<dyn PokemonStore>) -> Router {
    create_router_with_state(AppState::new(store))
}
