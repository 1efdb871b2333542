//! Storefront JSON API Healthcheck Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::envelope::{ApiResult, SuccessResponse};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[handler]
pub(crate) async fn handler() -> ApiResult<HealthResponse> {
    Ok(Json(SuccessResponse::new(
        HealthResponse {
            status: "ok".to_string(),
        },
        "service healthy",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let router = Router::new().push(Router::with_path("healthcheck").get(handler));

        let response: SuccessResponse<HealthResponse> =
            TestClient::get("http://example.com/healthcheck")
                .send(&Service::new(router))
                .await
                .take_json()
                .await?;

        assert!(response.success, "expected success envelope");
        assert_eq!(response.data.status, "ok");

        Ok(())
    }
}
