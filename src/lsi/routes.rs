//! HTTP route handlers for the LSI API.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::{envelope, CalculationResponse};
use crate::error::{ChemistryError, Result};

use super::calculator::{compute_lsi, compute_target_ph};
use super::interpretation::interpret;
use super::models::{LsiInput, LsiInterpretation, LsiResult, LsiTargetInput, LsiTargetResult};

/// Create the LSI router with all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/target-ph", post(target_ph))
        .route("/interpret", post(interpret_lsi))
}

/// LSI result with its band attached.
#[derive(Debug, Serialize)]
pub struct LsiReport {
    #[serde(flatten)]
    pub result: LsiResult,
    pub interpretation: LsiInterpretation,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InterpretRequest {
    pub lsi: f64,
}

/// Compute and interpret the LSI for a set of readings.
async fn calculate(Json(request): Json<LsiInput>) -> Result<Json<CalculationResponse<LsiReport>>> {
    let result = compute_lsi(&request)?;
    let interpretation = interpret(result.lsi);

    tracing::debug!(
        lsi = result.lsi,
        status = interpretation.label,
        tds_estimated = result.tds_estimated,
        "lsi calculated"
    );

    Ok(Json(envelope(
        &request,
        LsiReport {
            result,
            interpretation,
        },
    )))
}

/// Solve for the pH that gives the requested LSI.
async fn target_ph(
    Json(request): Json<LsiTargetInput>,
) -> Result<Json<CalculationResponse<LsiTargetResult>>> {
    let result = compute_target_ph(&request)?;

    for warning in &result.warnings {
        tracing::warn!(target_lsi = request.target_lsi, "{}", warning);
    }
    tracing::debug!(target_ph = result.target_ph, "target ph calculated");

    Ok(Json(envelope(&request, result)))
}

/// Classify an LSI value computed elsewhere.
async fn interpret_lsi(
    Json(request): Json<InterpretRequest>,
) -> Result<Json<CalculationResponse<LsiInterpretation>>> {
    if !request.lsi.is_finite() {
        return Err(ChemistryError::validation("lsi", "must be a finite number"));
    }
    Ok(Json(envelope(&request, interpret(request.lsi))))
}
