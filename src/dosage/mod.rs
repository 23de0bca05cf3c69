//! Chemical dosage module.
//!
//! Two modes per chemical: how much product reaches a target level, and what
//! a given addition does to the current level. Both run on one linear model
//! driven by the product table in [`chemicals`].

mod calculator;
pub mod chemicals;
mod models;
mod presentation;
mod routes;

pub use calculator::{compute_dosage, compute_dosage_effect, compute_dosage_target};
pub use chemicals::{Chemical, Product};
pub use models::{
    DoseAmount, DoseEffect, DosageEffectRequest, DosageRequest, DosageResult, DosageTargetRequest,
};
pub use presentation::present;
pub use routes::router;
