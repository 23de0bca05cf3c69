//! Pool volume module.
//!
//! Derives surface area, cubic feet and gallons from a pool's shape and
//! average depth. The gallons figure is the input every dosage calculation
//! scales against.

mod calculator;
mod models;
mod routes;

pub use calculator::{compute_volume, surface_area};
pub use models::{PoolDimensions, PoolShape, PoolShapeSpec, PoolVolumeResult, ShapeKind};
pub use routes::router;
