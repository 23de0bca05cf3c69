//! Surface area and volume from pool geometry.

use std::f64::consts::PI;

use super::models::{PoolShape, PoolShapeSpec, PoolVolumeResult};
use crate::error::{require_positive_dimension, Result};
use crate::units::{round_to, GALLONS_PER_CUBIC_FOOT};

/// Freeform/kidney pools fill roughly 80% of their bounding rectangle.
const KIDNEY_FILL_FACTOR: f64 = 0.8;

fn validate(spec: &PoolShapeSpec) -> Result<()> {
    match spec.shape {
        PoolShape::Rectangular { length, width }
        | PoolShape::Oval { length, width }
        | PoolShape::Kidney { length, width } => {
            require_positive_dimension("length", length)?;
            require_positive_dimension("width", width)?;
        }
        PoolShape::Circular { diameter } => {
            require_positive_dimension("diameter", diameter)?;
        }
    }
    require_positive_dimension("avg_depth", spec.avg_depth)?;
    Ok(())
}

/// Water surface area in square feet (unrounded).
pub fn surface_area(shape: &PoolShape) -> f64 {
    match *shape {
        PoolShape::Rectangular { length, width } => length * width,
        PoolShape::Circular { diameter } => PI * (diameter / 2.0).powi(2),
        PoolShape::Oval { length, width } => PI * (length / 2.0) * (width / 2.0),
        PoolShape::Kidney { length, width } => KIDNEY_FILL_FACTOR * length * width,
    }
}

/// Compute surface area, cubic feet and gallons for a pool.
pub fn compute_volume(spec: &PoolShapeSpec) -> Result<PoolVolumeResult> {
    validate(spec)?;

    let area = surface_area(&spec.shape);
    let cubic_feet = area * spec.avg_depth;
    let gallons = (cubic_feet * GALLONS_PER_CUBIC_FOOT).round();

    Ok(PoolVolumeResult {
        cubic_feet: round_to(cubic_feet, 2),
        gallons,
        surface_area: round_to(area, 2),
    })
}
