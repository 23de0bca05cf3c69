//! HTTP surface for the engine, called by the pool-service web app.

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::{dosage, lsi, tds, volume};

pub const ENGINE: &str = "poolchem-engine";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Successful calculation with audit metadata.
#[derive(Debug, Serialize)]
pub struct CalculationResponse<T> {
    pub engine: &'static str,
    pub engine_version: &'static str,
    /// SHA256 of the request JSON
    pub input_hash: String,
    #[serde(flatten)]
    pub result: T,
}

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

/// Wrap a result with the engine identity and a hash of its request.
pub fn envelope<R: Serialize, T>(request: &R, result: T) -> CalculationResponse<T> {
    let input_json = serde_json::to_string(request).unwrap_or_default();
    CalculationResponse {
        engine: ENGINE,
        engine_version: ENGINE_VERSION,
        input_hash: sha256_hex(&input_json),
        result,
    }
}

/// All engine endpoints, without middleware.
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/volume", volume::router())
        .nest("/api/dosage", dosage::router())
        .nest("/api/lsi", lsi::router())
        .nest("/api/tds", tds::router())
}

/// Endpoints plus compression, request tracing and optional CORS.
pub fn build_router(config: &Config) -> Router {
    let app = routes()
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    match &config.cors_allow_origin {
        Some(origin) => app.layer(
            CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        None => app,
    }
}

/// Health check for the calculation engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": ENGINE,
        "version": ENGINE_VERSION,
        "calculators": ["volume", "dosage", "lsi", "tds"]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        // Extractor rejections come back as plain text
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    #[test]
    fn test_input_hash() {
        let response = envelope(&json!({"test": true}), 1);
        assert!(response.input_hash.starts_with("sha256:"));
        assert_eq!(response.input_hash.len(), 7 + 64); // "sha256:" + 64 hex chars
    }

    #[test]
    fn test_same_request_same_hash() {
        let a = envelope(&json!({"lsi": 0.1}), ());
        let b = envelope(&json!({"lsi": 0.1}), ());
        let c = envelope(&json!({"lsi": 0.2}), ());
        assert_eq!(a.input_hash, b.input_hash);
        assert_ne!(a.input_hash, c.input_hash);
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = build_router(&Config::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_volume_endpoint() {
        let (status, body) = post(
            "/api/volume/calculate",
            json!({"shape": "rectangular", "length": 32, "width": 16, "avg_depth": 5}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["surface_area"], 512.0);
        assert_eq!(body["gallons"], 19150.0);
        assert_eq!(body["engine"], ENGINE);
    }

    #[tokio::test]
    async fn test_volume_endpoint_rejects_bad_dimension() {
        let (status, body) = post(
            "/api/volume/calculate",
            json!({"shape": "circular", "diameter": -4, "avg_depth": 5}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_dimension");
        assert_eq!(body["field"], "diameter");
    }

    #[tokio::test]
    async fn test_dosage_target_endpoint() {
        let (status, body) = post(
            "/api/dosage/calculate",
            json!({
                "mode": "target",
                "chemical": "free_chlorine",
                "gallons": 20000,
                "current_level": 0,
                "target_level": 3,
                "chemical_type": "liquid"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "target");
        assert_eq!(body["amount"], 60.0);
        assert_eq!(body["unit"], "fluid_ounces");
        assert_eq!(body["product"], "liquid");
    }

    #[tokio::test]
    async fn test_dosage_effect_endpoint() {
        let (status, body) = post(
            "/api/dosage/calculate",
            json!({
                "mode": "effect",
                "chemical": "total_alkalinity",
                "gallons": 20000,
                "current_level": 80,
                "amount_added": 6,
                "unit": "pounds"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "effect");
        assert_eq!(body["new_level"], 110.0);
    }

    #[tokio::test]
    async fn test_dosage_unknown_selector_rejected() {
        let (status, body) = post(
            "/api/dosage/calculate",
            json!({
                "mode": "target",
                "chemical": "free_chlorine",
                "gallons": 20000,
                "current_level": 0,
                "target_level": 3,
                "chemical_type": "bleach"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = body.as_str().unwrap_or_default();
        assert!(message.contains("chemical_type"), "{message}");
        assert!(message.contains("bleach"), "{message}");
    }

    #[tokio::test]
    async fn test_dosage_endpoint_accepts_unit_aliases() {
        let (status, body) = post(
            "/api/dosage/calculate",
            json!({
                "mode": "effect",
                "chemical": "alkalinity",
                "gallons": 20000,
                "current_level": 80,
                "amount_added": 6,
                "unit": "lb"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["new_level"], 110.0);
    }

    #[tokio::test]
    async fn test_dosage_tiny_target_is_not_no_action() {
        let (status, body) = post(
            "/api/dosage/calculate",
            json!({
                "mode": "target",
                "chemical": "ph",
                "gallons": 100,
                "current_level": 7.5,
                "target_level": 7.52
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["no_action"], false);
        assert_eq!(body["amount"], 0.01);
        assert_eq!(body["unit"], "ounces");
    }

    #[tokio::test]
    async fn test_lsi_endpoint() {
        let (status, body) = post(
            "/api/lsi/calculate",
            json!({
                "ph": 7.6,
                "temp_f": 80,
                "calcium": 250,
                "alkalinity": 100,
                "tds": {"source": "estimate"}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tds"], 695.0);
        assert_eq!(body["interpretation"]["status"], "balanced");
        assert_eq!(body["factors"]["a"], 0.184);
    }

    #[tokio::test]
    async fn test_lsi_endpoint_rejects_low_ph() {
        let (status, body) = post(
            "/api/lsi/calculate",
            json!({
                "ph": 5.0,
                "temp_f": 80,
                "calcium": 250,
                "alkalinity": 100,
                "tds": {"source": "measured", "value": 1000}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "out_of_range");
        assert_eq!(body["field"], "ph");
    }

    #[tokio::test]
    async fn test_target_ph_endpoint() {
        let (status, body) = post(
            "/api/lsi/target-ph",
            json!({
                "target_lsi": 0.0,
                "temp_f": 80,
                "calcium": 250,
                "alkalinity": 100,
                "tds": {"source": "estimate"}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["target_ph"], 7.54);
        assert!(body.get("warnings").is_none());
    }

    #[tokio::test]
    async fn test_interpret_endpoint() {
        let (status, body) = post("/api/lsi/interpret", json!({"lsi": -2.5})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "highly_corrosive");
        assert_eq!(body["label"], "Highly Corrosive");
    }

    #[tokio::test]
    async fn test_tds_endpoint() {
        let (status, body) = post(
            "/api/tds/estimate",
            json!({"calcium": 250, "alkalinity": 100, "salt_ppm": 3200}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tds"], 3895.0);
    }
}
