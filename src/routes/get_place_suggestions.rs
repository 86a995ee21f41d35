use std::collections::HashMap;

use crate::types::app_state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GetPlaceSuggestionsResponseData {
    pub suggestions: HashMap<String, String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceSuggestionsResponse {
    pub data: GetPlaceSuggestionsResponseData,
}

pub async fn get_place_suggestions(
    State(state): State<AppState>,
) -> Json<GetPlaceSuggestionsResponse> {
    Json(GetPlaceSuggestionsResponse {
        data: GetPlaceSuggestionsResponseData {
            suggestions: state.places_client.suggestions_map(),
        },
    })
}
