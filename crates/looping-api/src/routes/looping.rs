//! Looping Calculator API Routes
//!
//! REST endpoints for the looping calculator:
//! - GET /looping/defaults - Default inputs, labels and slider settings
//! - POST /looping/calculate - Evaluate a set of inputs
//! - POST /looping/simulation - Flattened simulation parameters

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use looping::{constants, evaluate, simulation_params, validate_inputs, LoopingReport};
use looping_core::{AssetLabels, CalcError, LoopingInputs};

use crate::dto::{
    ApiError, CalculateRequest, CalculateResponse, DefaultsResponse, SimulationResponse,
};
use crate::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// Create looping router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/defaults", get(get_defaults))
        .route("/calculate", post(calculate))
        .route("/simulation", post(simulation))
}

/// GET /looping/defaults - Seed values for a form
async fn get_defaults(State(state): State<AppState>) -> Json<DefaultsResponse> {
    let inputs = *state.default_inputs();
    Json(DefaultsResponse {
        inputs,
        labels: state.default_labels().resolved(),
        leverage_max: looping::compute_max_leverage(inputs.max_ltv()),
        leverage_step: constants::leverage::STEP,
    })
}

/// POST /looping/calculate - Evaluate inputs and render display strings
async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> ApiResult<CalculateResponse> {
    let (inputs, labels) = resolve_request(&state, &req)?;

    let outputs = evaluate(&inputs);
    let report = LoopingReport::new(&outputs, &labels);

    tracing::debug!(
        leverage = outputs.leverage,
        health = %outputs.health_ratio,
        apr = outputs.resulting_apr_pct,
        "Evaluated looping position"
    );

    Ok(Json(CalculateResponse {
        inputs,
        labels,
        outputs,
        report,
    }))
}

/// POST /looping/simulation - Simulation parameter set
async fn simulation(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> ApiResult<SimulationResponse> {
    let (inputs, labels) = resolve_request(&state, &req)?;

    Ok(Json(SimulationResponse {
        params: simulation_params(&inputs, &labels),
    }))
}

/// Merge request over defaults and validate ranges
fn resolve_request(
    state: &AppState,
    req: &CalculateRequest,
) -> Result<(LoopingInputs, AssetLabels), (StatusCode, Json<ApiError>)> {
    let inputs = req.inputs.apply(state.default_inputs());
    validate_inputs(&inputs).map_err(|e| {
        tracing::warn!("Rejected looping inputs: {}", e);
        calc_error_response(&e)
    })?;

    let labels = req
        .labels
        .as_ref()
        .unwrap_or_else(|| state.default_labels())
        .resolved();

    Ok((inputs, labels))
}

fn calc_error_response(e: &CalcError) -> (StatusCode, Json<ApiError>) {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::UNPROCESSABLE_ENTITY);
    (status, Json(ApiError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let app = create_router(AppState::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_defaults() {
        let (status, body) = post_json("/looping/calculate", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outputs"]["leverage_max"], 4.0);
        assert_eq!(body["outputs"]["health_ratio"]["kind"], "unbounded");
        assert_eq!(body["outputs"]["liquidation"]["status"], "no_debt");
        assert_eq!(body["report"]["health_ratio"], "Health Ratio: inf");
    }

    #[tokio::test]
    async fn test_calculate_leveraged() {
        let (status, body) = post_json(
            "/looping/calculate",
            json!({
                "inputs": { "leverage": 2.0, "borrow_apr_pct": 3.0 },
                "labels": { "asset_a": "wstETH", "asset_b": "WETH" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outputs"]["resulting_apr_pct"], 7.0);
        assert_eq!(body["outputs"]["health_ratio"]["value"], 1.6);
        assert_eq!(
            body["report"]["liquidation"][0],
            "Liquidated if 1 wstETH = 0.6250 WETH"
        );
    }

    #[tokio::test]
    async fn test_calculate_rejects_out_of_range() {
        let (status, body) =
            post_json("/looping/calculate", json!({ "inputs": { "max_ltv_pct": 150.0 } })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_range");
    }

    #[tokio::test]
    async fn test_simulation_params() {
        let (status, body) = post_json(
            "/looping/simulation",
            json!({ "labels": { "asset_a": "ETH", "asset_b": "USDC" } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["params"]["initial_amount_ETH"], 100.0);
        assert_eq!(body["params"]["borrow_apr_USDC"], 0.07);
        assert_eq!(body["params"]["health_ratio"], "inf");
    }

    #[tokio::test]
    async fn test_defaults_endpoint() {
        let app = create_router(AppState::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/looping/defaults")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["leverage_max"], 4.0);
        assert_eq!(body["leverage_step"], 0.1);
        assert_eq!(body["labels"]["asset_a"], "Asset A");
    }
}
