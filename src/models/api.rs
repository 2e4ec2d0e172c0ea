//! API response envelope.
//!
//! Every endpoint wraps its payload in `{status, result, comment}`.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Call status reported inside the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    Ok,
    Failed,
}

/// Envelope wrapping every API payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,

    /// Payload, present when `status` is `OK`
    pub result: Option<T>,

    /// Remote-provided failure reason
    #[serde(default)]
    pub comment: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, or produce the fatal request error.
    ///
    /// A non-200 status code fails even when the body claims `OK`.
    pub fn into_result(self, query: &str, code: u16) -> Result<T> {
        match self {
            ApiResponse {
                status: ApiStatus::Ok,
                result: Some(result),
                ..
            } if code == 200 => Ok(result),
            ApiResponse { comment, .. } => Err(AppError::api(
                query,
                comment.unwrap_or_else(|| "unknown".to_string()),
                code,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ok_envelope() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":"OK","result":[1,2,3]}"#).unwrap();
        assert_eq!(envelope.status, ApiStatus::Ok);
        assert_eq!(envelope.into_result("q", 200).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn failed_envelope_carries_comment() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":"FAILED","comment":"handles: User not found"}"#)
                .unwrap();
        let error = envelope.into_result("contest.list", 200).unwrap_err();
        assert!(matches!(
            error,
            AppError::Api { ref reason, code: 200, .. } if reason == "handles: User not found"
        ));
    }

    #[test]
    fn missing_comment_defaults_to_unknown() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":"FAILED"}"#).unwrap();
        let error = envelope.into_result("contest.list", 400).unwrap_err();
        assert!(matches!(
            error,
            AppError::Api { ref reason, code: 400, .. } if reason == "unknown"
        ));
    }

    #[test]
    fn non_200_fails_even_when_body_says_ok() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":"OK","result":[]}"#).unwrap();
        assert!(envelope.into_result("contest.list", 503).is_err());
    }
}
