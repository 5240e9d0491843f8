//! Response envelope shared by every SportsTalk endpoint.
//!
//! Successful and failed calls both come back as
//! `{"kind": ..., "message": ..., "code": ..., "data": ...}`. The HTTP
//! status is only consulted when the body is missing a code of its own.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::ProtocolError;

/// Kind tag of a successful envelope.
pub const RESULT_KIND: &str = "api.result";

/// Kind tag used for errors, including ones synthesized client-side.
pub const ERROR_KIND: &str = "api.error";

/// Raw decoded envelope before success/failure is decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub message: String,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub code: u16,

    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code) && self.kind != ERROR_KIND
    }

    /// Split the envelope into its payload or a typed error.
    ///
    /// A success without `data` yields `Value::Null`, which deserializes
    /// cleanly into `()` and `Option<T>`.
    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.is_success() {
            return Ok(self.data.unwrap_or(Value::Null));
        }

        let kind = if self.kind.is_empty() {
            ERROR_KIND.to_string()
        } else {
            self.kind
        };

        Err(ApiError {
            kind,
            message: self.message,
            code: self.code,
            data: self.data,
        })
    }
}

/// Typed error reported by the server (or synthesized in its shape).
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind} ({code}): {message}")]
pub struct ApiError {
    pub kind: String,
    pub message: String,
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>, code: u16) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            code,
            data: None,
        }
    }

    /// Wrap a failure whose body is not a SportsTalk envelope (proxy pages,
    /// gateway timeouts and the like).
    pub fn unstructured(status: u16, body: &str) -> Self {
        let message = match body.trim() {
            "" => format!("HTTP {status}"),
            text => text.to_string(),
        };
        Self::new(ERROR_KIND, message, status)
    }

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Decode a response body into an [`ApiResponse`].
///
/// `status` fills in the envelope code when the server left it out. An empty
/// body on a 2xx status is treated as a success with no payload.
pub fn parse_envelope(status: u16, body: &str) -> Result<ApiResponse, ProtocolError> {
    let body = body.trim();

    if body.is_empty() {
        if (200..300).contains(&status) {
            return Ok(ApiResponse {
                kind: RESULT_KIND.to_string(),
                message: String::new(),
                code: status,
                data: None,
            });
        }
        return Err(ProtocolError::EmptyBody);
    }

    if !body.starts_with('{') {
        return Err(ProtocolError::InvalidFormat(
            "response body is not a JSON object".to_string(),
        ));
    }

    let mut response: ApiResponse = serde_json::from_str(body)?;
    if response.code == 0 {
        response.code = status;
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_envelope() {
        let body = r#"{"kind":"api.result","message":"Success","code":200,"data":{"id":"r1"}}"#;
        let response = parse_envelope(200, body).unwrap();

        assert!(response.is_success());
        assert_eq!(response.into_result().unwrap(), json!({"id": "r1"}));
    }

    #[test]
    fn test_parse_error_envelope() {
        let body = r#"{"kind":"api.result","message":"Room not found","code":404,"data":null}"#;
        let err = parse_envelope(404, body).unwrap().into_result().unwrap_err();

        assert_eq!(err.code, 404);
        assert_eq!(err.message, "Room not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_kind_fails_even_with_2xx_code() {
        let body = r#"{"kind":"api.error","message":"nope","code":200}"#;
        let err = parse_envelope(200, body).unwrap().into_result().unwrap_err();

        assert_eq!(err.kind, ERROR_KIND);
    }

    #[test]
    fn test_missing_code_uses_status() {
        let body = r#"{"kind":"api.result","message":"Forbidden"}"#;
        let err = parse_envelope(403, body).unwrap().into_result().unwrap_err();

        assert_eq!(err.code, 403);
        assert_eq!(err.kind, "api.result");
    }

    #[test]
    fn test_error_data_is_preserved() {
        let body = r#"{"kind":"api.result","message":"bad","code":400,"data":{"field":"userid"}}"#;
        let err = parse_envelope(400, body).unwrap().into_result().unwrap_err();

        assert_eq!(err.data, Some(json!({"field": "userid"})));
    }

    #[test]
    fn test_empty_success_body() {
        let response = parse_envelope(204, "").unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn test_empty_error_body() {
        assert!(matches!(
            parse_envelope(502, "  "),
            Err(ProtocolError::EmptyBody)
        ));
    }

    #[test]
    fn test_non_json_body() {
        assert!(matches!(
            parse_envelope(500, "<html>Bad Gateway</html>"),
            Err(ProtocolError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unstructured_error() {
        let err = ApiError::unstructured(502, "");
        assert_eq!(err.kind, ERROR_KIND);
        assert_eq!(err.code, 502);
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.to_string(), "api.error (502): HTTP 502");
    }
}
