use serde::{Deserialize, Serialize};

/// A venue as described by a Places details lookup.
///
/// Fields the API leaves out stay empty (or `0.0` for the rating).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub rating: f64,
}
