//! HTTP route handlers for the volume API.

use axum::{response::Json, routing::post, Router};

use crate::api::{envelope, CalculationResponse};
use crate::error::Result;

use super::calculator::compute_volume;
use super::models::{PoolDimensions, PoolShapeSpec, PoolVolumeResult};

/// Create the volume router.
pub fn router() -> Router {
    Router::new().route("/calculate", post(calculate))
}

/// Compute a pool's volume from its shape and dimensions.
async fn calculate(
    Json(request): Json<PoolDimensions>,
) -> Result<Json<CalculationResponse<PoolVolumeResult>>> {
    let spec = PoolShapeSpec::try_from(&request)?;
    let result = compute_volume(&spec)?;

    tracing::debug!(
        shape = %request.shape,
        gallons = result.gallons,
        "pool volume calculated"
    );

    Ok(Json(envelope(&request, result)))
}
