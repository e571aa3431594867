use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pokedex_error::{
    anyhow::{self, Context as _},
    bail, ensure,
};

/// A single Pokedex entry as persisted by the entity store.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
}

impl PokemonRecord {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Lookup-by-primary-key contract consumed by the lookup service.
///
/// The in-scope contract never fails; the `Result` exists so a storage fault
/// in a real backing store can surface to the caller as a server error.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    async fn find_by_id(
        &self,
        pokedex_entry_number: u32,
    ) -> anyhow::Result<Option<PokemonRecord>>;
}

/// In-memory entity store. Records are fixed at construction, so concurrent
/// lookups never observe a partially seeded Pokedex.
#[derive(Debug)]
pub struct MemoryPokemonStore {
    records: HashMap<u32, PokemonRecord>,
}

impl MemoryPokemonStore {
    pub fn new(records: impl IntoIterator<Item = PokemonRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id, record))
                .collect(),
        }
    }

    /// The built-in Pokedex used when no `POKEDEX_SEED` file is configured.
    #[must_use]
    pub fn with_default_seed() -> Self {
        Self::new([
            PokemonRecord::new(1, "Bulbasaur"),
            PokemonRecord::new(4, "Charmander"),
            PokemonRecord::new(7, "Squirtle"),
            PokemonRecord::new(25, "Pikachu"),
            PokemonRecord::new(133, "Eevee"),
            PokemonRecord::new(151, "Mew"),
        ])
    }

    pub fn from_seed_file(path: &str) -> anyhow::Result<Self> {
        let seed = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read Pokedex seed file {path}"))?;

        Self::from_seed_json(&seed)
            .with_context(|| format!("Invalid Pokedex seed file {path}"))
    }

    /// Parses a JSON array of `{"id": ..., "name": ...}` records, rejecting
    /// non-positive entry numbers, empty names, and duplicate entry numbers.
    pub fn from_seed_json(seed: &str) -> anyhow::Result<Self> {
        let records: Vec<PokemonRecord> = serde_json::from_str(seed)
            .context("Failed to parse Pokedex seed as a JSON array of records")?;

        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            ensure!(
                record.id > 0,
                "Pokedex entry number must be positive, got {}",
                record.id
            );
            ensure!(
                !record.name.trim().is_empty(),
                "Pokedex entry {} has an empty name",
                record.id
            );

            if let Some(previous) = by_id.insert(record.id, record) {
                bail!("Duplicate Pokedex entry number {}", previous.id);
            }
        }

        Ok(Self { records: by_id })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PokemonStore for MemoryPokemonStore {
    async fn find_by_id(
        &self,
        pokedex_entry_number: u32,
    ) -> anyhow::Result<Option<PokemonRecord>> {
        Ok(self.records.get(&pokedex_entry_number).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_a_seeded_record() {
        let store = MemoryPokemonStore::new([PokemonRecord::new(25, "Pikachu")]);

        let record = store.find_by_id(25).await.unwrap();

        assert_eq!(record, Some(PokemonRecord::new(25, "Pikachu")));
    }

    #[tokio::test]
    async fn returns_none_for_an_unknown_entry_number() {
        let store = MemoryPokemonStore::with_default_seed();

        let record = store.find_by_id(999).await.unwrap();

        assert_eq!(record, None);
    }

    #[test]
    fn parses_a_json_seed() {
        let store = MemoryPokemonStore::from_seed_json(
            r#"[{"id": 25, "name": "Pikachu"}, {"id": 133, "name": "Eevee"}]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rejects_a_seed_with_an_empty_name() {
        let err = MemoryPokemonStore::from_seed_json(r#"[{"id": 25, "name": "  "}]"#)
            .unwrap_err();

        assert_eq!(err.to_string(), "Pokedex entry 25 has an empty name");
    }

    #[test]
    fn rejects_a_seed_with_a_non_positive_entry_number() {
        let err = MemoryPokemonStore::from_seed_json(r#"[{"id": 0, "name": "MissingNo"}]"#)
            .unwrap_err();

        assert_eq!(err.to_string(), "Pokedex entry number must be positive, got 0");
    }

    #[test]
    fn rejects_a_seed_with_duplicate_entry_numbers() {
        let err = MemoryPokemonStore::from_seed_json(
            r#"[{"id": 25, "name": "Pikachu"}, {"id": 25, "name": "Raichu"}]"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Duplicate Pokedex entry number 25");
    }
}
