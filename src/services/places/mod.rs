pub mod place_details_parser;
pub mod places_client;
pub mod types;
