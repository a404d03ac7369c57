//! DTOs for the link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    pub url: Option<String>,
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Reads the fields from an arbitrary JSON body.
    ///
    /// A field that is missing or not a string is `None`, so it fails the
    /// same validation as an absent one.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);

        Self {
            url: field("url"),
            code: field("code"),
        }
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Response body for `DELETE /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_response_serializes_null_last_clicked() {
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(value["code"], "abc123");
        assert_eq!(value["target_url"], "https://example.com");
        assert_eq!(value["total_clicks"], 0);
        assert!(value["last_clicked"].is_null());
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn test_create_request_missing_fields() {
        let req: CreateLinkRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.url.is_none());
        assert!(req.code.is_none());

        let req: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();
        assert_eq!(req.url.as_deref(), Some("https://example.com"));
        assert!(req.code.is_none());
    }

    #[test]
    fn test_create_request_from_json_ignores_non_strings() {
        let req = CreateLinkRequest::from_json(&json!({ "url": 123, "code": "abcdef" }));
        assert!(req.url.is_none());
        assert_eq!(req.code.as_deref(), Some("abcdef"));

        let req = CreateLinkRequest::from_json(&json!({ "url": "https://example.com", "code": 123456 }));
        assert_eq!(req.url.as_deref(), Some("https://example.com"));
        assert!(req.code.is_none());

        let req = CreateLinkRequest::from_json(&json!(["https://example.com"]));
        assert!(req.url.is_none());
        assert!(req.code.is_none());
    }
}
