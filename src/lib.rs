//! Pool water-chemistry calculation engine.
//!
//! Pure calculators for pool volume, chemical dosing and the Langelier
//! Saturation Index, plus the Axum routes the pool-service web app calls.
//! The calculators hold no state and perform no I/O; they are safe to call
//! from any number of threads.
//!
//! ```
//! use poolchem_engine::volume::{compute_volume, PoolShape, PoolShapeSpec};
//! use poolchem_engine::dosage::{compute_dosage_target, Chemical, DosageTargetRequest, Product};
//!
//! let pool = compute_volume(&PoolShapeSpec {
//!     shape: PoolShape::Rectangular { length: 32.0, width: 16.0 },
//!     avg_depth: 5.0,
//! })
//! .unwrap();
//!
//! let dose = compute_dosage_target(&DosageTargetRequest {
//!     chemical: Chemical::FreeChlorine,
//!     gallons: pool.gallons,
//!     current_level: 1.0,
//!     target_level: 3.0,
//!     product: Some(Product::LiquidChlorine),
//! })
//! .unwrap();
//!
//! assert!(dose.amount().unwrap() > 0.0);
//! ```

pub mod api;
pub mod config;
pub mod dosage;
pub mod error;
pub mod lsi;
pub mod tds;
pub mod units;
pub mod volume;

pub use error::{ChemistryError, Result};
