//! Total dissolved solids estimate for when TDS was not measured.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::{envelope, CalculationResponse};
use crate::error::{require_non_negative, Result};

/// Baseline dissolved solids from source water, ppm.
const BASELINE_TDS: f64 = 200.0;
const CALCIUM_WEIGHT: f64 = 1.5;
const ALKALINITY_WEIGHT: f64 = 1.2;

/// Estimate TDS in ppm from the other readings, rounded to the nearest ppm.
///
/// `calcium*1.5 + alkalinity*1.2 + salt + cya + 200`
pub fn estimate_tds(
    calcium: f64,
    alkalinity: f64,
    salt_ppm: Option<f64>,
    cya_ppm: Option<f64>,
) -> f64 {
    let tds = calcium * CALCIUM_WEIGHT
        + alkalinity * ALKALINITY_WEIGHT
        + salt_ppm.unwrap_or(0.0)
        + cya_ppm.unwrap_or(0.0)
        + BASELINE_TDS;
    tds.round()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EstimateRequest {
    pub calcium: f64,
    pub alkalinity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_ppm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cya_ppm: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub tds: f64,
}

impl EstimateRequest {
    fn validate(&self) -> Result<()> {
        require_non_negative("calcium", self.calcium)?;
        require_non_negative("alkalinity", self.alkalinity)?;
        if let Some(salt) = self.salt_ppm {
            require_non_negative("salt_ppm", salt)?;
        }
        if let Some(cya) = self.cya_ppm {
            require_non_negative("cya_ppm", cya)?;
        }
        Ok(())
    }
}

/// Create the TDS router.
pub fn router() -> Router {
    Router::new().route("/estimate", post(estimate))
}

async fn estimate(
    Json(request): Json<EstimateRequest>,
) -> Result<Json<CalculationResponse<EstimateResponse>>> {
    request.validate()?;
    let tds = estimate_tds(
        request.calcium,
        request.alkalinity,
        request.salt_ppm,
        request.cya_ppm,
    );
    tracing::debug!(tds, "tds estimated");
    Ok(Json(envelope(&request, EstimateResponse { tds })))
}
