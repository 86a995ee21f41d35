use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesClientError {
    #[error("Error processing Places API URL: {0}")]
    InvalidUrl(String),

    #[error("Error connecting to Places API: {0}")]
    Transport(reqwest::Error),

    #[error("Places API request cancelled")]
    Cancelled,

    #[error("Cannot process JSON results: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cannot process JSON results: missing `{0}` object")]
    MissingObject(&'static str),
}

impl From<reqwest::Error> for PlacesClientError {
    // reqwest renders the full URL in its messages, and the URL carries the API key.
    fn from(e: reqwest::Error) -> Self {
        PlacesClientError::Transport(e.without_url())
    }
}
