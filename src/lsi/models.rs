//! Data types for Langelier Saturation Index calculation.

use serde::{Deserialize, Serialize};

/// Where the TDS figure comes from. Estimation only happens when asked for.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Tds {
    /// Measured TDS in ppm
    Measured { value: f64 },
    /// Estimate from calcium, alkalinity and optional salt/CYA readings
    Estimate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        salt_ppm: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cya_ppm: Option<f64>,
    },
}

/// Water readings for an LSI calculation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LsiInput {
    pub ph: f64,
    /// Water temperature in °F
    pub temp_f: f64,
    /// Calcium hardness, ppm
    pub calcium: f64,
    /// Total alkalinity, ppm
    pub alkalinity: f64,
    pub tds: Tds,
}

/// Readings for solving the pH that yields `target_lsi`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LsiTargetInput {
    pub target_lsi: f64,
    pub temp_f: f64,
    pub calcium: f64,
    pub alkalinity: f64,
    pub tds: Tds,
}

/// Intermediate terms of the saturation pH.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LsiFactors {
    /// TDS factor, 3 decimals
    pub a: f64,
    /// Temperature factor
    pub b: f64,
    /// Calcium factor
    pub c: f64,
    /// Alkalinity factor
    pub d: f64,
    pub temp_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LsiResult {
    pub lsi: f64,
    /// Saturation pH
    pub phs: f64,
    pub factors: LsiFactors,
    /// TDS used in the calculation, ppm
    pub tds: f64,
    pub tds_estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LsiTargetResult {
    pub target_ph: f64,
    pub phs: f64,
    pub factors: LsiFactors,
    pub tds: f64,
    pub tds_estimated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Water balance classification, ordered from corrosive to scale-forming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LsiStatus {
    HighlyCorrosive,
    Corrosive,
    SlightlyCorrosive,
    Balanced,
    SlightlyScaleForming,
    ScaleForming,
    HighlyScaleForming,
}

/// What an LSI value means for the pool and what to do about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LsiInterpretation {
    pub status: LsiStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}
