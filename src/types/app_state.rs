use crate::services::places::places_client::PlacesClient;

#[derive(Clone)]
pub struct AppState {
    pub places_client: PlacesClient,
    pub auth_key: Option<String>,
}
