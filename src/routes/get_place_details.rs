use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceDetailsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub reference: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceDetailsResponseData {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub rating: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceDetailsResponse {
    pub data: GetPlaceDetailsResponseData,
}

pub async fn get_place_details(
    State(state): State<AppState>,
    ValidatedQuery(GetPlaceDetailsPayload { reference }): ValidatedQuery<GetPlaceDetailsPayload>,
) -> Result<Response, AppError> {
    let place = state
        .places_client
        .place_details(&reference)
        .await
        .ok_or_else(|| {
            error!("Failed to fetch place details");
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch place details")
        })?;

    Ok(Json(GetPlaceDetailsResponse {
        data: GetPlaceDetailsResponseData {
            name: place.name,
            address: place.address,
            phone_number: place.phone_number,
            rating: place.rating,
        },
    })
    .into_response())
}
