//! Health check endpoint

use axum::{extract::State, Json};
use looping::validate_inputs;

use crate::dto::HealthResponse;
use crate::AppState;

/// GET /health - Report version, and "degraded" when the configured
/// default inputs would be rejected by validation
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match validate_inputs(state.default_inputs()) {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Configured default inputs are invalid");
            "degraded"
        }
    };
    Json(HealthResponse::new(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use looping_core::{AppConfig, LoopingInputs};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_health(state: AppState) -> Value {
        let response = create_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok_with_default_config() {
        let body = get_health(AppState::new()).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_degraded_with_invalid_defaults() {
        let state = AppState::with_config(AppConfig {
            defaults: LoopingInputs {
                max_ltv_pct: 140.0,
                ..LoopingInputs::default()
            },
            ..AppConfig::default()
        });
        let body = get_health(state).await;
        assert_eq!(body["status"], "degraded");
    }
}
