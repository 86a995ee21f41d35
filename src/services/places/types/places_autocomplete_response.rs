use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PlacesAutocompleteResponsePrediction {
    pub description: String,
    pub reference: String,
}

#[derive(Serialize, Deserialize)]
pub struct PlacesAutocompleteResponse {
    pub predictions: Vec<PlacesAutocompleteResponsePrediction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
