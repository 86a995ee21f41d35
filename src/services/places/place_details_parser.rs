use serde_json::{Map, Value};
use tracing::{debug, error};

use super::{
    places_client::log_api_status,
    types::{place::Place, places_client_error::PlacesClientError},
};

/// Builds a `Place` from a details response body.
///
/// Fields are extracted independently, so a missing or mistyped field only
/// defaults that field. A body without a `result` object gives `Place::default()`.
pub fn parse_place(body: &str) -> Place {
    let result = match extract_result(body) {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            return Place::default();
        }
    };

    debug!("Place details result object: {:?}", result);

    Place {
        name: extract_string(&result, "name").unwrap_or_default(),
        address: extract_string(&result, "formatted_address").unwrap_or_default(),
        phone_number: extract_string(&result, "formatted_phone_number").unwrap_or_default(),
        rating: extract_f64(&result, "rating").unwrap_or_default(),
    }
}

fn extract_result(body: &str) -> Result<Map<String, Value>, PlacesClientError> {
    let mut root = match serde_json::from_str::<Value>(body)? {
        Value::Object(root) => root,
        _ => return Err(PlacesClientError::MissingObject("result")),
    };

    log_api_status(
        root.get("status").and_then(Value::as_str),
        root.get("error_message").and_then(Value::as_str),
    );

    match root.remove("result") {
        Some(Value::Object(result)) => Ok(result),
        _ => Err(PlacesClientError::MissingObject("result")),
    }
}

pub fn extract_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_owned)
}

/// Numbers are taken as-is; numeric strings are parsed.
pub fn extract_f64(object: &Map<String, Value>, key: &str) -> Option<f64> {
    match object.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn as_object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn parses_all_fields() {
        let body = json!({
            "result": {
                "name": "Hotel X",
                "formatted_address": "1 Main St, Springfield",
                "formatted_phone_number": "(555) 010-0000",
                "rating": 4.2,
                "types": ["lodging"]
            },
            "status": "OK"
        })
        .to_string();

        assert_eq!(
            parse_place(&body),
            Place {
                name: "Hotel X".to_string(),
                address: "1 Main St, Springfield".to_string(),
                phone_number: "(555) 010-0000".to_string(),
                rating: 4.2,
            }
        );
    }

    #[test]
    fn missing_fields_default() {
        let body = json!({ "result": { "name": "Hotel X", "rating": 4.5 } }).to_string();

        let place = parse_place(&body);

        assert_eq!(place.name, "Hotel X");
        assert_eq!(place.rating, 4.5);
        assert_eq!(place.address, "");
        assert_eq!(place.phone_number, "");
    }

    #[test]
    fn mistyped_field_only_defaults_that_field() {
        let body = json!({
            "result": {
                "name": 42,
                "formatted_address": "1 Main St",
                "rating": { "value": 3 }
            }
        })
        .to_string();

        let place = parse_place(&body);

        assert_eq!(place.name, "");
        assert_eq!(place.address, "1 Main St");
        assert_eq!(place.rating, 0.0);
    }

    #[test]
    fn structural_failures_give_default_place() {
        assert_eq!(parse_place(""), Place::default());
        assert_eq!(parse_place("{\"result\": "), Place::default());
        assert_eq!(parse_place("[1, 2]"), Place::default());
        assert_eq!(parse_place(r#"{"status":"INVALID_REQUEST"}"#), Place::default());
        assert_eq!(parse_place(r#"{"result":"Hotel X"}"#), Place::default());
    }

    #[test]
    fn extract_f64_accepts_numeric_strings() {
        let object = as_object(json!({ "a": 3, "b": " 4.5 ", "c": "high", "d": null }));

        assert_eq!(extract_f64(&object, "a"), Some(3.0));
        assert_eq!(extract_f64(&object, "b"), Some(4.5));
        assert_eq!(extract_f64(&object, "c"), None);
        assert_eq!(extract_f64(&object, "d"), None);
        assert_eq!(extract_f64(&object, "missing"), None);
    }

    #[test]
    fn extract_string_rejects_non_strings() {
        let object = as_object(json!({ "a": "x", "b": 1, "c": null }));

        assert_eq!(extract_string(&object, "a"), Some("x".to_string()));
        assert_eq!(extract_string(&object, "b"), None);
        assert_eq!(extract_string(&object, "c"), None);
    }
}
