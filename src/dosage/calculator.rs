//! Linear dosing model shared by every chemical.

use super::chemicals::{resolve_product, Product};
use super::models::{
    DoseAmount, DoseEffect, DosageEffectRequest, DosageRequest, DosageResult, DosageTargetRequest,
};
use super::presentation::{present, round_nonzero};
use crate::error::{require_non_negative, require_positive_dimension, ChemistryError, Result};
use crate::units::{round_to, DoseUnit, POUNDS_PER_BAG, REFERENCE_GALLONS};

/// Level change from `amount` base units at `rate` in `gallons` of water.
fn level_change(amount: f64, gallons: f64, rate: f64) -> f64 {
    amount / gallons * REFERENCE_GALLONS * rate
}

/// Base units needed for a level change of `delta` at `rate`.
fn amount_for_change(delta: f64, gallons: f64, rate: f64) -> f64 {
    delta * gallons / REFERENCE_GALLONS / rate
}

/// Compute how much product moves the water from its current level to the
/// target. Returns a zero amount when the target is already met.
pub fn compute_dosage_target(request: &DosageTargetRequest) -> Result<DosageResult> {
    let chemical = request.chemical;
    let gallons = require_positive_dimension("gallons", request.gallons)?;
    let current = chemical.check_level("current_level", request.current_level)?;
    let target = chemical.check_level("target_level", request.target_level)?;
    let product = resolve_product(chemical, request.product, true)?;
    let rate = product.target_rate().ok_or_else(|| {
        ChemistryError::validation(
            "chemical_type",
            format!("{product} only lowers {chemical}; use effect mode"),
        )
    })?;

    let no_action = current >= target;
    let base_amount = if no_action {
        0.0
    } else {
        amount_for_change(target - current, gallons, rate)
    };

    let (amount, unit) = present(product, base_amount);
    let bags = (product == Product::Salt).then(|| round_nonzero(base_amount / POUNDS_PER_BAG, 2));

    Ok(DosageResult::Target(DoseAmount {
        product,
        amount,
        unit,
        bags,
        no_action,
    }))
}

/// Compute the level reached after adding an amount of product.
pub fn compute_dosage_effect(request: &DosageEffectRequest) -> Result<DosageResult> {
    let chemical = request.chemical;
    let gallons = require_positive_dimension("gallons", request.gallons)?;
    let current = chemical.check_level("current_level", request.current_level)?;
    let amount_added = require_non_negative("amount_added", request.amount_added)?;
    let product = resolve_product(chemical, request.product, false)?;
    let base_amount = amount_added * unit_factor(product, request.unit)?;

    let raw_level = current + level_change(base_amount, gallons, product.effect_rate());
    let decimals = chemical.level_decimals();
    let new_level = round_to(chemical.clamp(raw_level), decimals);

    Ok(DosageResult::Effect(DoseEffect {
        product,
        previous_level: current,
        new_level,
        change: round_to(new_level - current, decimals),
    }))
}

/// Dispatch on the request's mode.
pub fn compute_dosage(request: &DosageRequest) -> Result<DosageResult> {
    match request {
        DosageRequest::Target(target) => compute_dosage_target(target),
        DosageRequest::Effect(effect) => compute_dosage_effect(effect),
    }
}

fn unit_factor(product: Product, unit: DoseUnit) -> Result<f64> {
    let rejected = || {
        ChemistryError::validation(
            "unit",
            format!("{product} cannot be measured in {}", unit.label()),
        )
    };
    if !product.accepted_units().contains(&unit) {
        return Err(rejected());
    }
    unit.factor_to(product.base_unit()).ok_or_else(rejected)
}
