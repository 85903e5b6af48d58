/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Common types shared by every fx-advice service response

use fxa_core::Error;
use serde::{Deserialize, Serialize};

/// Envelope every service call resolves to.
///
/// The service reports application outcomes through the HTTP status code:
/// a 2xx carries the typed payload in `response_object`, anything else
/// carries the error payload in `error_object`. Both slots stay optional
/// so callers can branch on `http_code` and inspect whichever side is
/// populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// HTTP status code of the response
    pub http_code: u16,

    /// Typed payload, present on 2xx responses with a body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_object: Option<T>,

    /// Error payload, present on non-2xx responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_object: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Whether the status code is in the 2xx class
    pub fn is_success(&self) -> bool {
        self.http_code / 100 == 2
    }

    /// Convert the envelope into the payload or an error.
    ///
    /// A 2xx without a payload is an `InvalidResponse`; a non-2xx becomes
    /// an `Api` error summarizing the error payload.
    pub fn into_inner(self) -> fxa_core::Result<T> {
        if self.is_success() {
            self.response_object.ok_or_else(|| {
                Error::InvalidResponse(format!(
                    "HTTP {} carried no response object",
                    self.http_code
                ))
            })
        } else {
            let detail = self
                .error_object
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no error payload".to_string());
            Err(Error::Api(format!("HTTP {}: {}", self.http_code, detail)))
        }
    }
}

/// Error payload returned by the advice service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Service error code, e.g. "VALIDATION_FAILED"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Per-field validation errors, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

impl ErrorBody {
    /// Parse an error payload from a raw response body.
    ///
    /// Bodies that are not the documented error shape (HTML gateway
    /// pages, plain text) degrade to a message-only payload.
    pub fn from_raw(body: &str) -> Option<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str(trimmed) {
            Ok(parsed) => Some(parsed),
            Err(_) => Some(ErrorBody {
                code: None,
                message: Some(trimmed.to_string()),
                field_errors: Vec::new(),
            }),
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(msg)) => write!(f, "{code}: {msg}")?,
            (Some(code), None) => write!(f, "{code}")?,
            (None, Some(msg)) => write!(f, "{msg}")?,
            (None, None) => write!(f, "unspecified error")?,
        }
        for fe in &self.field_errors {
            write!(f, "; {}: {}", fe.field, fe.message)?;
        }
        Ok(())
    }
}

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: String,

    /// What the service rejected about it
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse { http_code: 200, response_object: Some(vec![1, 2]), error_object: None };
        assert!(resp.is_success());
        assert_eq!(resp.into_inner().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_success_without_payload_is_invalid() {
        let resp: ApiResponse<Vec<u32>> =
            ApiResponse { http_code: 204, response_object: None, error_object: None };
        let err = resp.into_inner().unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_error_envelope() {
        let resp: ApiResponse<Vec<u32>> = ApiResponse {
            http_code: 400,
            response_object: None,
            error_object: ErrorBody::from_raw(
                r#"{"code":"VALIDATION_FAILED","message":"advice rejected","fieldErrors":[{"field":"transactionCcy","message":"is required"}]}"#,
            ),
        };
        assert!(!resp.is_success());
        let err = resp.into_inner().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("VALIDATION_FAILED"));
        assert!(text.contains("transactionCcy"));
    }

    #[test]
    fn test_error_body_degrades_to_message() {
        let body = ErrorBody::from_raw("<html>Bad Gateway</html>").unwrap();
        assert_eq!(body.code, None);
        assert_eq!(body.message.as_deref(), Some("<html>Bad Gateway</html>"));
        assert!(ErrorBody::from_raw("   ").is_none());
    }
}
