use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_location_search_autocomplete;
mod get_place_details;
mod get_place_suggestions;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/location-search-autocomplete",
        get(get_location_search_autocomplete::get_location_search_autocomplete),
    )
    .route("/place-details", get(get_place_details::get_place_details))
    .route(
        "/place-suggestions",
        get(get_place_suggestions::get_place_suggestions),
    )
}
