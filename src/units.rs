//! Fixed unit conversions shared by every calculator.
//!
//! These values are part of the engine contract. Changing any of them shifts
//! every volume and dose the CRUD side has ever recorded.

use serde::{Deserialize, Serialize};

/// US gallons in one cubic foot.
pub const GALLONS_PER_CUBIC_FOOT: f64 = 7.48052;

/// Liters in one US gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;

/// Grams in one pound (avoirdupois).
pub const GRAMS_PER_POUND: f64 = 453.592;

/// Grams of water in one liter.
pub const GRAMS_PER_LITER: f64 = 1000.0;

pub const FLUID_OUNCES_PER_GALLON: f64 = 128.0;

pub const OUNCES_PER_POUND: f64 = 16.0;

/// Pounds in a standard bag of pool salt.
pub const POUNDS_PER_BAG: f64 = 40.0;

/// Dosing rates are quoted per this many gallons of pool water.
pub const REFERENCE_GALLONS: f64 = 10_000.0;

/// Units a chemical amount can be expressed in.
///
/// Deserialized through `FromStr`, so "lb" or "fl_oz" read the same from
/// JSON as from a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DoseUnit {
    Pounds,
    Ounces,
    Bags,
    FluidOunces,
    Gallons,
}

impl DoseUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pounds => "pounds",
            Self::Ounces => "ounces",
            Self::Bags => "bags",
            Self::FluidOunces => "fluid_ounces",
            Self::Gallons => "gallons",
        }
    }

    /// Human label used in messages ("fluid ounces", not "fluid_ounces").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pounds => "pounds",
            Self::Ounces => "ounces",
            Self::Bags => "bags",
            Self::FluidOunces => "fluid ounces",
            Self::Gallons => "gallons",
        }
    }

    /// How many of `base` units one of `self` is worth, when the two measure
    /// the same quantity (mass or liquid volume).
    pub fn factor_to(self, base: DoseUnit) -> Option<f64> {
        use DoseUnit::*;
        match (self, base) {
            (a, b) if a == b => Some(1.0),
            (Ounces, Pounds) => Some(1.0 / OUNCES_PER_POUND),
            (Pounds, Ounces) => Some(OUNCES_PER_POUND),
            (Bags, Pounds) => Some(POUNDS_PER_BAG),
            (Pounds, Bags) => Some(1.0 / POUNDS_PER_BAG),
            (Gallons, FluidOunces) => Some(FLUID_OUNCES_PER_GALLON),
            (FluidOunces, Gallons) => Some(1.0 / FLUID_OUNCES_PER_GALLON),
            _ => None,
        }
    }
}

impl std::fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DoseUnit {
    type Err = crate::error::ChemistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pounds" | "lb" | "lbs" => Ok(Self::Pounds),
            "ounces" | "oz" => Ok(Self::Ounces),
            "bags" => Ok(Self::Bags),
            "fluid_ounces" | "fluid ounces" | "fl_oz" => Ok(Self::FluidOunces),
            "gallons" | "gal" => Ok(Self::Gallons),
            other => Err(crate::error::ChemistryError::validation(
                "unit",
                format!("unrecognized unit '{other}'"),
            )),
        }
    }
}

impl TryFrom<String> for DoseUnit {
    type Error = crate::error::ChemistryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
