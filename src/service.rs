use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pokedex_error::anyhow;

use crate::store::PokemonStore;

/// The public shape of a successful lookup. Equality is structural: two
/// responses are equal iff their names are equal.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PokemonResponse {
    pub name: String,
}

/// The domain failure for a Pokedex entry number with no record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PokemonNotFound {
    message: String,
}

impl PokemonNotFound {
    fn new(pokedex_entry_number: u32) -> Self {
        Self {
            message: format!("Pokedex entry {pokedex_entry_number} not found."),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PokemonNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PokemonNotFound {}

/// Failure modes of [`PokemonService::pokemon_by_id`]. `NotFound` is the only
/// in-scope domain failure; `Store` carries an underlying storage fault, which
/// the HTTP layer surfaces as a generic server error.
#[derive(Debug)]
pub enum LookupError {
    NotFound(PokemonNotFound),
    Store(anyhow::Error),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(not_found) => not_found.fmt(f),
            Self::Store(source) => write!(f, "Pokedex store failure: {source}"),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(not_found) => Some(not_found),
            Self::Store(source) => Some(source.as_ref()),
        }
    }
}

/// Translates a Pokedex entry number into a response or a failure. The entire
/// business logic is a presence check against the injected store.
#[derive(Clone)]
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
}

impl PokemonService {
    pub fn new(store: Arc<dyn PokemonStore>) -> Self {
        Self { store }
    }

    /// Performs exactly one store lookup for the given entry number.
    pub async fn pokemon_by_id(
        &self,
        pokedex_entry_number: u32,
    ) -> Result<PokemonResponse, LookupError> {
        let record = self
            .store
            .find_by_id(pokedex_entry_number)
            .await
            .map_err(LookupError::Store)?;

        match record {
            Some(record) => Ok(PokemonResponse { name: record.name }),
            None => Err(LookupError::NotFound(PokemonNotFound::new(
                pokedex_entry_number,
            ))),
        }
    }
}
