//! Response and error envelopes.
//!
//! Every endpoint returns `{success, data, message}` on success and
//! `{success: false, error: {code, message, details?}}` on failure, with
//! the HTTP status derived from a fixed error-code table.

use salvo::{async_trait, catcher::Catcher, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> SuccessResponse<T> {
    pub(crate) fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// The handler result type: enveloped data or an enveloped error.
pub(crate) type ApiResult<T> = Result<Json<SuccessResponse<T>>, ApiError>;

/// Error taxonomy shared by all endpoints.
///
/// `Unauthorized`, `Forbidden`, and `Conflict` are declared ahead of use;
/// only conflict is currently emitted (unique violations on create).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum ErrorCode {
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,

    #[serde(rename = "UNAUTHORIZED")]
    Unauthorized,

    #[serde(rename = "FORBIDDEN")]
    Forbidden,

    #[serde(rename = "CONFLICT")]
    Conflict,

    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorCode {
    #[must_use]
    pub(crate) fn status(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidInput,
            StatusCode::NOT_FOUND => Self::ResourceNotFound,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::CONFLICT => Self::Conflict,
            _ => Self::Internal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Failure response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

/// A typed API failure; rendering it writes the error envelope.
#[derive(Debug)]
pub(crate) struct ApiError {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

impl ApiError {
    pub(crate) fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// A generic internal error; internal detail is never surfaced to the
    /// caller.
    pub(crate) fn internal() -> Self {
        Self::new(ErrorCode::Internal, "internal server error")
    }

    pub(crate) fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.code.status());
        res.render(Json(ErrorResponse {
            success: false,
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        }));
    }
}

/// Rewrites framework-generated error responses (unmatched routes, caught
/// panics) into the error envelope.
#[handler]
pub(crate) async fn catch_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let message = status
        .canonical_reason()
        .unwrap_or("internal server error")
        .to_lowercase();

    res.render(Json(ErrorResponse {
        success: false,
        error: ErrorBody {
            code: ErrorCode::from_status(status),
            message,
            details: None,
        },
    }));

    ctrl.skip_rest();
}

/// The service-wide catcher.
pub(crate) fn error_catcher() -> Catcher {
    Catcher::default().hoop(catch_error)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_codes_map_to_the_fixed_status_table() {
        assert_eq!(ErrorCode::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ResourceNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::Conflict.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_codes_serialize_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(ErrorCode::Internal).ok(),
            Some(json!("INTERNAL_ERROR"))
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::ResourceNotFound).ok(),
            Some(json!("RESOURCE_NOT_FOUND"))
        );
    }

    #[test]
    fn success_envelope_sets_success_true() {
        let envelope = SuccessResponse::new(1, "ok");

        assert!(envelope.success, "envelope must mark success");
        assert_eq!(
            serde_json::to_value(&envelope).ok(),
            Some(json!({ "success": true, "data": 1, "message": "ok" }))
        );
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let error = ApiError::invalid_input("bad sort");

        let body = ErrorResponse {
            success: false,
            error: ErrorBody {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        };

        assert_eq!(
            serde_json::to_value(&body).ok(),
            Some(json!({
                "success": false,
                "error": { "code": "INVALID_INPUT", "message": "bad sort" }
            }))
        );
    }
}
