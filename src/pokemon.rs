use axum::{
    Json,
    extract::{Path, State},
};

use pokedex_error::{bad_request, not_found};

use crate::{
    Result,
    service::{LookupError, PokemonResponse},
    state::AppState,
};

/// Handler for `GET /v1/pokemon/:pokedex_entry_number`.
///
/// The path segment is parsed here rather than by the extractor so that a
/// non-integer entry number gets the same JSON error body as every other
/// failure.
pub(crate) async fn pokemon_by_entry(
    State(state): State<AppState>,
    Path(pokedex_entry_number): Path<String>,
) -> Result<Json<PokemonResponse>> {
    let Ok(pokedex_entry_number) = pokedex_entry_number.parse::<u32>() else {
        bad_request!("Invalid Pokedex entry number: {pokedex_entry_number:?}");
    };

    match state.service.pokemon_by_id(pokedex_entry_number).await {
        Ok(response) => Ok(Json(response)),
        Err(LookupError::NotFound(not_found)) => not_found!("{}", not_found.message()),
        Err(LookupError::Store(source)) => Err(source.into()),
    }
}
