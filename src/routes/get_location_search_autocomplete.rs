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
pub struct GetLocationSearchAutocompletePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub search: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseData {
    pub predictions: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponse {
    pub data: GetLocationSearchAutocompleteResponseData,
}

pub async fn get_location_search_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(GetLocationSearchAutocompletePayload { search }): ValidatedQuery<
        GetLocationSearchAutocompletePayload,
    >,
) -> Result<Response, AppError> {
    let predictions = state
        .places_client
        .autocomplete(&search)
        .await
        .ok_or_else(|| {
            error!("Failed to fetch location search autocomplete");
            AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch location search autocomplete",
            )
        })?;

    Ok(Json(GetLocationSearchAutocompleteResponse {
        data: GetLocationSearchAutocompleteResponseData { predictions },
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::gen_mock_app,
        services::places::types::places_autocomplete_response::{
            PlacesAutocompleteResponse, PlacesAutocompleteResponsePrediction,
        },
        utils::app_error::AppErrorResponse,
    };

    #[tokio::test]
    async fn test_get_location_search_autocomplete() {
        let mut mock_app = gen_mock_app().await;

        let mock_places_response = PlacesAutocompleteResponse {
            predictions: vec![
                PlacesAutocompleteResponsePrediction {
                    description: "Paris, France".to_string(),
                    reference: "ref1".to_string(),
                },
                PlacesAutocompleteResponsePrediction {
                    description: "Paris, TX, United States".to_string(),
                    reference: "ref2".to_string(),
                },
            ],
            status: Some("OK".to_string()),
            error_message: None,
        };

        let mock_server = mock_app
            .places_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .with_body(serde_json::to_string(&mock_places_response).unwrap())
            .match_query(mockito::Matcher::UrlEncoded(
                "input".to_string(),
                "paris".to_string(),
            ))
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/location-search-autocomplete?search=paris")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert_async().await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetLocationSearchAutocompleteResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body.data.predictions,
            vec!["Paris, France", "Paris, TX, United States"]
        );
        assert_eq!(
            mock_app.places_client.reference_for("Paris, TX, United States"),
            Some("ref2".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_search_is_rejected() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/location-search-autocomplete?search=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: AppErrorResponse = serde_json::from_slice(&body).unwrap();

        assert!(body.message.starts_with("Invalid query"));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let mut mock_app = gen_mock_app().await;

        let _mock = mock_app
            .places_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .with_body("{\"predictions\": 5}")
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/location-search-autocomplete?search=paris")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
