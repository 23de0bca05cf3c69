//! Request and result types for dosage calculation.

use serde::{Deserialize, Serialize};

use super::chemicals::{Chemical, Product};
use crate::units::DoseUnit;

/// How much product is needed to move `current_level` up to `target_level`?
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DosageTargetRequest {
    pub chemical: Chemical,
    /// Pool volume in US gallons
    pub gallons: f64,
    pub current_level: f64,
    pub target_level: f64,
    /// Chemical type; required for free chlorine
    #[serde(default, alias = "chemical_type", skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// What does adding `amount_added` do to `current_level`?
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DosageEffectRequest {
    pub chemical: Chemical,
    /// Pool volume in US gallons
    pub gallons: f64,
    pub current_level: f64,
    pub amount_added: f64,
    pub unit: DoseUnit,
    /// Chemical type; required for free chlorine and pH
    #[serde(default, alias = "chemical_type", skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// Dosage calculation, tagged by mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DosageRequest {
    Target(DosageTargetRequest),
    Effect(DosageEffectRequest),
}

/// Amount of product to add.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoseAmount {
    pub product: Product,
    /// Amount in `unit`, 2 decimals; 0 only when no action is needed
    pub amount: f64,
    pub unit: DoseUnit,
    /// Same amount in 40 lb bags (salt only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bags: Option<f64>,
    /// Current level already meets the target
    pub no_action: bool,
}

/// Level after a product was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoseEffect {
    pub product: Product,
    pub previous_level: f64,
    pub new_level: f64,
    pub change: f64,
}

/// Result of a dosage calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DosageResult {
    Target(DoseAmount),
    Effect(DoseEffect),
}

impl DosageResult {
    /// Amount to add (target mode only).
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Target(dose) => Some(dose.amount),
            Self::Effect(_) => None,
        }
    }

    /// Resulting level (effect mode only).
    pub fn new_level(&self) -> Option<f64> {
        match self {
            Self::Target(_) => None,
            Self::Effect(effect) => Some(effect.new_level),
        }
    }

    /// True when the water already meets the target.
    pub fn is_no_action(&self) -> bool {
        matches!(self, Self::Target(dose) if dose.no_action)
    }
}
