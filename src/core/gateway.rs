//! API Gateway proxy events, as delivered to and expected back from a Lambda function.

use crate::utils::error::{ApiError, ErrorKind, Result};
use base64::Engine;
use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const LOCATION: &str = "Location";
pub const APPLICATION_JSON: &str = "application/json";

/// The gateway sends `null` rather than `{}` for empty maps.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    pub http_method: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    pub fn new(method: &str) -> Self {
        Self {
            http_method: method.to_string(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query_string_parameters
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Header lookup ignoring the case the client sent it in.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters.get(name).map(String::as_str)
    }

    /// True when the media type (parameters ignored) is `application/json`.
    pub fn has_json_body(&self) -> bool {
        self.header(CONTENT_TYPE)
            .and_then(|value| value.split(';').next())
            .map(|media_type| media_type.trim().eq_ignore_ascii_case(APPLICATION_JSON))
            .unwrap_or(false)
    }

    /// Raw body bytes, decoding base64 when the gateway flagged it.
    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        let body = self.body.as_deref().unwrap_or_default();
        if !self.is_base64_encoded {
            return Ok(body.as_bytes().to_vec());
        }

        base64::engine::general_purpose::STANDARD
            .decode(body)
            .map_err(|e| ApiError::UnprocessableBody {
                reason: format!("invalid base64 body: {}", e),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: HashMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self> {
        let body = serde_json::to_string(value)?;
        Ok(Self::new(status)
            .with_header(CONTENT_TYPE, APPLICATION_JSON)
            .with_body(body))
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Response carrying only the status and its reason phrase.
    pub fn status_only(status: StatusCode) -> Self {
        Self::new(status).with_body(status.canonical_reason().unwrap_or_default())
    }

    /// Folds an error into a response. Server errors are logged with detail but
    /// the caller only ever sees the generic reason phrase.
    pub fn from_error(err: &ApiError) -> Self {
        let status = err.status_code();
        match err.kind() {
            ErrorKind::Server => tracing::error!(error = %err, "request failed"),
            ErrorKind::NotFound => tracing::debug!(error = %err, "record not found"),
            ErrorKind::Client => tracing::warn!(error = %err, status = status.as_u16(), "rejected request"),
        }
        Self::status_only(status)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ApiError> for GatewayResponse {
    fn from(err: ApiError) -> Self {
        Self::from_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_event_with_null_maps() {
        let request: GatewayRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "GET",
            "path": "/employees",
            "headers": null,
            "queryStringParameters": null,
            "body": null,
            "isBase64Encoded": false
        }))
        .unwrap();

        assert_eq!(request.http_method, "GET");
        assert!(request.headers.is_empty());
        assert_eq!(request.query_parameter("employeeid"), None);
        assert_eq!(request.body_bytes().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = GatewayRequest::new("POST").with_header("content-type", "application/json");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.has_json_body());
    }

    #[test]
    fn test_json_media_type_parameters() {
        let request = GatewayRequest::new("POST")
            .with_header("Content-Type", "Application/JSON; charset=utf-8");
        assert!(request.has_json_body());

        let request = GatewayRequest::new("POST").with_header("Content-Type", "text/plain");
        assert!(!request.has_json_body());

        assert!(!GatewayRequest::new("POST").has_json_body());
    }

    #[test]
    fn test_base64_body() {
        let mut request = GatewayRequest::new("POST").with_body("eyJhIjoxfQ==");
        request.is_base64_encoded = true;
        assert_eq!(request.body_bytes().unwrap(), br#"{"a":1}"#.to_vec());

        request.body = Some("not base64!".to_string());
        assert!(matches!(
            request.body_bytes(),
            Err(ApiError::UnprocessableBody { .. })
        ));
    }

    #[test]
    fn test_server_error_hides_detail() {
        let response = GatewayResponse::from(ApiError::store("table Employees throttled"));
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "Internal Server Error");
    }

    #[test]
    fn test_response_wire_format() {
        let response = GatewayResponse::new(StatusCode::CREATED)
            .with_header(LOCATION, "/employees?employeeid=123-0000000001");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 201);
        assert_eq!(
            json["headers"]["Location"],
            "/employees?employeeid=123-0000000001"
        );
        assert_eq!(json["isBase64Encoded"], false);
    }
}
