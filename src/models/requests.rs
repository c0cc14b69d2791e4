use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{TripConfig, UserProfile};

/// Body of `POST /api/plan`: both payloads embedded under their names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub profile: UserProfile,
    pub config: TripConfig,
}

/// Query for `GET /api/locations/search`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationSearchQuery {
    #[validate(length(min = 2), custom(function = "decoded_cleanly"))]
    pub q: String,
}

/// Query for `GET /api/places/textsearch`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TextSearchQuery {
    #[validate(length(min = 1), custom(function = "decoded_cleanly"))]
    pub query: String,
}

/// Query for `GET /api/places/details`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceDetailsQuery {
    #[validate(length(min = 1), custom(function = "decoded_cleanly"))]
    pub place_id: String,
    #[validate(length(min = 1), custom(function = "decoded_cleanly"))]
    #[serde(default = "default_fields")]
    pub fields: String,
}

pub fn default_fields() -> String {
    "opening_hours,name".to_string()
}

/// Query strings are decoded lossily, so invalid UTF-8 such as `%FF%FE`
/// arrives as U+FFFD. Such values are rejected instead of forwarded.
fn decoded_cleanly(value: &str) -> Result<(), ValidationError> {
    if value.contains(char::REPLACEMENT_CHARACTER) {
        return Err(ValidationError::new("invalid_utf8"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_query_min_length() {
        assert!(LocationSearchQuery { q: "a".to_string() }.validate().is_err());
        assert!(LocationSearchQuery { q: "ab".to_string() }.validate().is_ok());
    }

    #[test]
    fn test_location_query_counts_characters() {
        // two characters, four bytes
        assert!(LocationSearchQuery { q: "éé".to_string() }.validate().is_ok());
        assert!(LocationSearchQuery { q: "é".to_string() }.validate().is_err());
    }

    #[test]
    fn test_rejects_undecodable_bytes() {
        let query = LocationSearchQuery { q: "\u{FFFD}\u{FFFD}".to_string() };
        assert!(query.validate().is_err());

        let details = PlaceDetailsQuery {
            place_id: "XYZ\u{FFFD}".to_string(),
            fields: default_fields(),
        };
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_text_search_rejects_empty() {
        assert!(TextSearchQuery { query: String::new() }.validate().is_err());
        assert!(TextSearchQuery { query: "p".to_string() }.validate().is_ok());
    }

    #[test]
    fn test_details_fields_default() {
        let query: PlaceDetailsQuery = serde_json::from_str(r#"{"place_id":"XYZ"}"#).unwrap();
        assert_eq!(query.fields, "opening_hours,name");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_details_rejects_empty_fields() {
        let query = PlaceDetailsQuery {
            place_id: "XYZ".to_string(),
            fields: String::new(),
        };
        assert!(query.validate().is_err());
    }
}
