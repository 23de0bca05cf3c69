//! Langelier Saturation Index module.
//!
//! Computes the LSI from water readings, classifies it into one of seven
//! water-balance bands, and solves the inverse problem: the pH that gives a
//! desired LSI.

mod calculator;
mod interpretation;
mod models;
mod routes;

pub use calculator::{compute_lsi, compute_target_ph, MAX_PH, MAX_TEMP_F, MIN_PH, MIN_TEMP_F};
pub use interpretation::interpret;
pub use models::{
    LsiFactors, LsiInput, LsiInterpretation, LsiResult, LsiStatus, LsiTargetInput,
    LsiTargetResult, Tds,
};
pub use routes::router;
