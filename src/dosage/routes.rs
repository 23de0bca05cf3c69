//! HTTP route handlers for the dosage API.

use axum::{response::Json, routing::post, Router};

use crate::api::{envelope, CalculationResponse};
use crate::error::Result;

use super::calculator::compute_dosage;
use super::models::{DosageRequest, DosageResult};

/// Create the dosage router.
pub fn router() -> Router {
    Router::new().route("/calculate", post(calculate))
}

/// Run a target- or effect-mode dosage calculation.
async fn calculate(
    Json(request): Json<DosageRequest>,
) -> Result<Json<CalculationResponse<DosageResult>>> {
    let result = compute_dosage(&request)?;

    match &result {
        DosageResult::Target(dose) => tracing::debug!(
            product = %dose.product,
            amount = dose.amount,
            unit = %dose.unit,
            "dosage target calculated"
        ),
        DosageResult::Effect(effect) => tracing::debug!(
            product = %effect.product,
            new_level = effect.new_level,
            "dosage effect calculated"
        ),
    }

    Ok(Json(envelope(&request, result)))
}
