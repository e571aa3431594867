mod pokemon;

pub mod env;
pub mod router;
pub mod service;
pub mod state;
pub mod store;

pub(crate) use pokedex_error::*;
