//! Relabels computed amounts into a human-scaled unit.
//!
//! Runs after the math, which always works in the product's base unit.

use super::chemicals::Product;
use crate::units::{round_to, DoseUnit, FLUID_OUNCES_PER_GALLON, OUNCES_PER_POUND};

/// Express `amount` (in `product.base_unit()`) in the unit a technician would
/// measure out, rounded to 2 decimals.
///
/// A positive amount never comes back as 0: it drops to the next smaller unit
/// the product is measured in, and is rounded up to 0.01 if still too small.
pub fn present(product: Product, amount: f64) -> (f64, DoseUnit) {
    let shown = round_to(amount, 2);
    let (value, unit) = match product {
        Product::LiquidChlorine if shown >= FLUID_OUNCES_PER_GALLON => {
            (amount / FLUID_OUNCES_PER_GALLON, DoseUnit::Gallons)
        }
        Product::PowderChlorine | Product::GranularChlorine if amount > 0.0 && shown < 1.0 => {
            (amount * OUNCES_PER_POUND, DoseUnit::Ounces)
        }
        _ => (amount, product.base_unit()),
    };

    let rounded = round_to(value, 2);
    if amount <= 0.0 || rounded > 0.0 {
        return (rounded, unit);
    }
    let (value, unit) = smaller_unit(product, value, unit);
    (round_nonzero(value, 2), unit)
}

/// Round to `decimals`, but never take a positive value down to 0.
pub fn round_nonzero(value: f64, decimals: i32) -> f64 {
    let rounded = round_to(value, decimals);
    if value > 0.0 && rounded == 0.0 {
        1.0 / 10_f64.powi(decimals)
    } else {
        rounded
    }
}

fn smaller_unit(product: Product, value: f64, unit: DoseUnit) -> (f64, DoseUnit) {
    let smaller = match unit {
        DoseUnit::Pounds => DoseUnit::Ounces,
        DoseUnit::Gallons => DoseUnit::FluidOunces,
        other => other,
    };
    match unit.factor_to(smaller) {
        Some(factor) if product.accepted_units().contains(&smaller) => (value * factor, smaller),
        _ => (value, unit),
    }
}
