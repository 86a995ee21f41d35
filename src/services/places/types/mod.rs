pub mod place;
pub mod places_autocomplete_response;
pub mod places_client_error;
