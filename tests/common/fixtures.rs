// Test data fixtures and fake stores

use async_trait::async_trait;
use rand::Rng;

use pokedex_backend::store::{PokemonRecord, PokemonStore};

/// The canonical seeded record used by the end-to-end scenarios.
pub fn pikachu() -> PokemonRecord {
    PokemonRecord::new(25, "Pikachu")
}

/// A random but valid Pokedex entry number, standing in for hand-picked test
/// data so scenarios don't accidentally depend on a specific value.
pub fn random_entry_number() -> u32 {
    rand::thread_rng().gen_range(1..=1025)
}

/// Hand-written fake store whose every lookup fails, for exercising the
/// generic server-error path.
pub struct FailingStore;

#[async_trait]
impl PokemonStore for FailingStore {
    async fn find_by_id(
        &self,
        _pokedex_entry_number: u32,
    ) -> anyhow::Result<Option<PokemonRecord>> {
        Err(anyhow::anyhow!("simulated storage outage"))
    }
}
