//! Client for the Places autocomplete and details API, with a small HTTP
//! front that exposes it.

pub mod app;
mod middlewares;
mod routes;
pub mod services;
pub mod types;
mod utils;

pub use services::places::{
    places_client::{PlacesClient, PlacesClientConfig},
    types::place::Place,
};
