use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::places::places_client::{PlacesClient, PlacesClientConfig},
    types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(places_config: PlacesClientConfig, auth_key: Option<String>) -> Router {
    gen_app_with_client(PlacesClient::new(places_config), auth_key)
}

pub fn gen_app_with_client(places_client: PlacesClient, auth_key: Option<String>) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        places_client,
        auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "ok"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub places_server: mockito::ServerGuard,
    pub places_client: PlacesClient,
}

/// App wired to a mock Places API. `places_client` shares its suggestion map with the app.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let places_server = mockito::Server::new_async().await;
    let places_client = PlacesClient::new(PlacesClientConfig {
        api_key: "key".to_string(),
        host: places_server.url(),
    });

    MockApp {
        app: gen_app_with_client(places_client.clone(), None),
        places_server,
        places_client,
    }
}
