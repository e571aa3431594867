// Shared test helpers for the Pokedex backend:
// - fixtures: seed records and hand-written fake stores
// - test_router: router construction with injected state

pub mod fixtures;
pub mod test_router;

pub use fixtures::*;
pub use test_router::*;
