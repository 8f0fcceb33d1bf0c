use serde::Serialize;
use serde_json::Value;

/// Status and body of an HTTP response, as read off the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

/// Normalized result of a JSON endpoint
///
/// Serializes as the decoded value itself, or as
/// `{"status_code": ..., "raw": ...}` when the body was not JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Json(Value),
    Unparsed { status_code: u16, raw: String },
}

impl ApiResponse {
    /// Decode `raw.body` as JSON, falling back to the status and raw text.
    ///
    /// The status code is not inspected when the body decodes: an error
    /// payload from the service comes back as ordinary JSON.
    pub fn from_raw(raw: RawResponse) -> Self {
        match serde_json::from_str::<Value>(&raw.body) {
            Ok(value) => ApiResponse::Json(value),
            Err(_) => ApiResponse::Unparsed {
                status_code: raw.status_code,
                raw: raw.body,
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ApiResponse::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Unparsed { .. } => None,
        }
    }

    /// Collapse into a single JSON value, fallback included
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Unparsed { status_code, raw } => serde_json::json!({
                "status_code": status_code,
                "raw": raw,
            }),
        }
    }
}

impl From<RawResponse> for ApiResponse {
    fn from(raw: RawResponse) -> Self {
        ApiResponse::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_json_body() {
        let response = ApiResponse::from_raw(RawResponse::new(200, r#"{"sun":"cancer"}"#));
        assert!(response.is_json());
        assert_eq!(response.into_value(), json!({"sun": "cancer"}));
    }

    #[test]
    fn test_error_status_with_json_passes_through() {
        let response =
            ApiResponse::from_raw(RawResponse::new(401, r#"{"message":"Invalid API key"}"#));
        assert_eq!(
            response,
            ApiResponse::Json(json!({"message": "Invalid API key"}))
        );
    }

    #[test]
    fn test_non_json_falls_back_to_status_and_raw() {
        let response =
            ApiResponse::from_raw(RawResponse::new(503, "<html>Service Unavailable</html>"));
        assert!(!response.is_json());
        assert_eq!(
            response.into_value(),
            json!({"status_code": 503, "raw": "<html>Service Unavailable</html>"})
        );
    }

    #[test]
    fn test_empty_body_falls_back() {
        let response = ApiResponse::from_raw(RawResponse::new(204, ""));
        assert_eq!(
            response,
            ApiResponse::Unparsed {
                status_code: 204,
                raw: String::new()
            }
        );
    }

    #[test]
    fn test_fallback_has_exactly_two_keys() {
        let value = ApiResponse::from_raw(RawResponse::new(502, "{truncated")).into_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("status_code"));
        assert!(object.contains_key("raw"));
    }

    #[test]
    fn test_serializes_untagged() {
        let unparsed = ApiResponse::from_raw(RawResponse::new(500, "oops"));
        assert_eq!(
            serde_json::to_value(&unparsed).unwrap(),
            json!({"status_code": 500, "raw": "oops"})
        );
        let decoded = ApiResponse::from_raw(RawResponse::new(200, "[1,2]"));
        assert_eq!(serde_json::to_value(&decoded).unwrap(), json!([1, 2]));
    }
}
