use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use reqwest::Url;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use urlencoding::encode;

use super::{
    place_details_parser::parse_place,
    types::{
        place::Place, places_autocomplete_response::PlacesAutocompleteResponse,
        places_client_error::PlacesClientError,
    },
};

pub const DEFAULT_PLACES_HOST: &str = "https://maps.googleapis.com";

const PLACES_API_PATH: &str = "/maps/api/place";
const TYPE_AUTOCOMPLETE: &str = "/autocomplete";
const TYPE_DETAILS: &str = "/details";
const OUT_JSON: &str = "/json";
const AUTOCOMPLETE_RADIUS: u32 = 1000;

#[derive(Clone)]
pub struct PlacesClientConfig {
    pub api_key: String,
    pub host: String,
}

/// Client for the Places autocomplete and details endpoints.
///
/// Every successful autocomplete call records `description -> reference`
/// pairs in a suggestion map shared by all clones of the client.
#[derive(Clone)]
pub struct PlacesClient {
    config: PlacesClientConfig,
    client: reqwest::Client,
    suggestions: Arc<Mutex<HashMap<String, String>>>,
}

impl PlacesClient {
    pub fn new(config: PlacesClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            suggestions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the descriptions of the predictions for `input`, in API order.
    ///
    /// `None` when the request fails or the response cannot be parsed as a
    /// whole; the suggestion map is only updated on success.
    pub async fn autocomplete(&self, input: &str) -> Option<Vec<String>> {
        self.autocomplete_cancellable(input, &CancellationToken::new())
            .await
    }

    pub async fn autocomplete_cancellable(
        &self,
        input: &str,
        cancel: &CancellationToken,
    ) -> Option<Vec<String>> {
        let query = format!(
            "sensor=false&key={}&radius={}&input={}",
            self.config.api_key,
            AUTOCOMPLETE_RADIUS,
            encode(input)
        );

        let body = match self.fetch_body(TYPE_AUTOCOMPLETE, &query, cancel).await {
            Ok(body) => body,
            Err(e) => {
                log_request_failure(&e);
                return None;
            }
        };

        let response = match serde_json::from_str::<PlacesAutocompleteResponse>(&body) {
            Ok(response) => response,
            Err(e) => {
                error!("{}", PlacesClientError::from(e));
                return None;
            }
        };

        log_api_status(
            response.status.as_deref(),
            response.error_message.as_deref(),
        );

        let descriptions = {
            let mut suggestions = self.lock_suggestions();

            response
                .predictions
                .into_iter()
                .map(|p| {
                    suggestions.insert(p.description.clone(), p.reference);
                    p.description
                })
                .collect::<Vec<String>>()
        };

        debug!("Places result list is: {:?}", descriptions);

        Some(descriptions)
    }

    /// Snapshot of every `description -> reference` pair seen so far.
    pub fn suggestions_map(&self) -> HashMap<String, String> {
        self.lock_suggestions().clone()
    }

    pub fn reference_for(&self, description: &str) -> Option<String> {
        self.lock_suggestions().get(description).cloned()
    }

    /// Looks up the place identified by `reference`.
    ///
    /// `None` only when the request itself fails. A response without a usable
    /// `result` object still yields a `Place`, with every field defaulted.
    pub async fn place_details(&self, reference: &str) -> Option<Place> {
        self.place_details_cancellable(reference, &CancellationToken::new())
            .await
    }

    pub async fn place_details_cancellable(
        &self,
        reference: &str,
        cancel: &CancellationToken,
    ) -> Option<Place> {
        let reference = strip_whitespace(reference);
        let query = format!(
            "sensor=false&key={}&reference={}",
            self.config.api_key,
            encode(&reference)
        );

        match self.fetch_body(TYPE_DETAILS, &query, cancel).await {
            Ok(body) => Some(parse_place(&body)),
            Err(e) => {
                log_request_failure(&e);
                None
            }
        }
    }

    fn endpoint_url(&self, request_type: &str, query: &str) -> Result<Url, PlacesClientError> {
        let url = format!(
            "{}{}{}{}?{}",
            self.config.host.trim_end_matches('/'),
            PLACES_API_PATH,
            request_type,
            OUT_JSON,
            query
        );

        Url::parse(&url).map_err(|e| PlacesClientError::InvalidUrl(e.to_string()))
    }

    async fn fetch_body(
        &self,
        request_type: &str,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<String, PlacesClientError> {
        let url = self.endpoint_url(request_type, query)?;

        let request = async {
            let resp = self.client.get(url).send().await?.error_for_status()?;
            Ok::<String, PlacesClientError>(resp.text().await?)
        };

        // Dropping the in-flight request releases its connection.
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(PlacesClientError::Cancelled),
            body = request => body,
        }
    }

    fn lock_suggestions(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.suggestions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

pub(super) fn log_api_status(status: Option<&str>, error_message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(status) => warn!(
            "Places API responded with status {}: {}",
            status,
            error_message.unwrap_or("no error message")
        ),
    }
}

fn log_request_failure(e: &PlacesClientError) {
    match e {
        PlacesClientError::Cancelled => info!("{}", e),
        _ => error!("{}", e),
    }
}

fn strip_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}
