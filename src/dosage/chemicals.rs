//! Chemical properties, dosing products and their rate table.
//!
//! Every product follows the same linear model:
//! `change = (amount / gallons) * 10_000 * rate`, with the amount expressed
//! in the product's base unit.

use serde::{Deserialize, Serialize};

use crate::error::{ChemistryError, Result};
use crate::units::{
    DoseUnit, GRAMS_PER_LITER, GRAMS_PER_POUND, LITERS_PER_GALLON, REFERENCE_GALLONS,
};

/// Salt ppm gained per pound in 10,000 gallons, from the exact gram model
/// (`salt_g / water_g * 1e6`).
pub const SALT_PPM_PER_POUND: f64 =
    GRAMS_PER_POUND * 1e6 / (LITERS_PER_GALLON * GRAMS_PER_LITER * REFERENCE_GALLONS);

/// Water-balance property a dose changes.
///
/// Deserialized through `FromStr`, so the short names ("chlorine", "cya")
/// are accepted wherever a chemical is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Chemical {
    Salt,
    FreeChlorine,
    Ph,
    TotalAlkalinity,
    CalciumHardness,
    CyanuricAcid,
}

impl Chemical {
    pub const ALL: [Chemical; 6] = [
        Self::Salt,
        Self::FreeChlorine,
        Self::Ph,
        Self::TotalAlkalinity,
        Self::CalciumHardness,
        Self::CyanuricAcid,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salt => "salt",
            Self::FreeChlorine => "free_chlorine",
            Self::Ph => "ph",
            Self::TotalAlkalinity => "total_alkalinity",
            Self::CalciumHardness => "calcium_hardness",
            Self::CyanuricAcid => "cyanuric_acid",
        }
    }

    /// Valid reading range. pH is bounded on both sides, ppm readings only below.
    pub const fn domain(self) -> (f64, Option<f64>) {
        match self {
            Self::Ph => (6.0, Some(9.0)),
            _ => (0.0, None),
        }
    }

    /// Decimal places kept on a computed level.
    pub const fn level_decimals(self) -> i32 {
        match self {
            Self::Salt => 0,
            Self::FreeChlorine | Self::Ph => 2,
            Self::TotalAlkalinity | Self::CalciumHardness | Self::CyanuricAcid => 1,
        }
    }

    /// Product used when the caller does not name one.
    ///
    /// Chlorine always needs an explicit type. pH only has an implicit
    /// product in target mode, where the only direction is up.
    pub const fn default_product(self, target_mode: bool) -> Option<Product> {
        match self {
            Self::Salt => Some(Product::Salt),
            Self::FreeChlorine => None,
            Self::Ph if target_mode => Some(Product::SodaAsh),
            Self::Ph => None,
            Self::TotalAlkalinity => Some(Product::SodiumBicarbonate),
            Self::CalciumHardness => Some(Product::CalciumChloride),
            Self::CyanuricAcid => Some(Product::Stabilizer),
        }
    }

    /// Clamp a computed level back into the valid domain.
    pub fn clamp(self, level: f64) -> f64 {
        match self.domain() {
            (min, Some(max)) => level.clamp(min, max),
            (min, None) => level.max(min),
        }
    }

    /// Check a reading against the domain, naming `field` on failure.
    pub fn check_level(self, field: &'static str, value: f64) -> Result<f64> {
        let (min, max) = self.domain();
        let in_range = value.is_finite() && value >= min && max.map_or(true, |m| value <= m);
        if in_range {
            return Ok(value);
        }
        let bounds = match max {
            Some(max) => format!("between {min} and {max}"),
            None => format!("{min} or greater"),
        };
        Err(ChemistryError::out_of_range(
            field,
            value,
            format!("{} level must be {bounds}", self.as_str()),
        ))
    }
}

impl std::fmt::Display for Chemical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Chemical {
    type Err = ChemistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "salt" => Ok(Self::Salt),
            "free_chlorine" | "chlorine" => Ok(Self::FreeChlorine),
            "ph" => Ok(Self::Ph),
            "total_alkalinity" | "alkalinity" => Ok(Self::TotalAlkalinity),
            "calcium_hardness" | "calcium" => Ok(Self::CalciumHardness),
            "cyanuric_acid" | "cya" => Ok(Self::CyanuricAcid),
            other => Err(ChemistryError::validation(
                "chemical",
                format!("unrecognized chemical '{other}'"),
            )),
        }
    }
}

impl TryFrom<String> for Chemical {
    type Error = ChemistryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A specific product added to the water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Product {
    Salt,
    /// Sodium hypochlorite solution
    #[serde(rename = "liquid")]
    LiquidChlorine,
    /// Calcium hypochlorite powder
    #[serde(rename = "powder")]
    PowderChlorine,
    /// Dichlor/trichlor granules
    #[serde(rename = "granular")]
    GranularChlorine,
    SodaAsh,
    MuriaticAcid,
    SodiumBicarbonate,
    CalciumChloride,
    Stabilizer,
}

impl Product {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salt => "salt",
            Self::LiquidChlorine => "liquid",
            Self::PowderChlorine => "powder",
            Self::GranularChlorine => "granular",
            Self::SodaAsh => "soda_ash",
            Self::MuriaticAcid => "muriatic_acid",
            Self::SodiumBicarbonate => "sodium_bicarbonate",
            Self::CalciumChloride => "calcium_chloride",
            Self::Stabilizer => "stabilizer",
        }
    }

    pub const fn chemical(self) -> Chemical {
        match self {
            Self::Salt => Chemical::Salt,
            Self::LiquidChlorine | Self::PowderChlorine | Self::GranularChlorine => {
                Chemical::FreeChlorine
            }
            Self::SodaAsh | Self::MuriaticAcid => Chemical::Ph,
            Self::SodiumBicarbonate => Chemical::TotalAlkalinity,
            Self::CalciumChloride => Chemical::CalciumHardness,
            Self::Stabilizer => Chemical::CyanuricAcid,
        }
    }

    /// Unit the rates below are quoted in.
    pub const fn base_unit(self) -> DoseUnit {
        match self {
            Self::LiquidChlorine => DoseUnit::FluidOunces,
            Self::MuriaticAcid => DoseUnit::Gallons,
            _ => DoseUnit::Pounds,
        }
    }

    /// Units accepted for an amount already added.
    pub const fn accepted_units(self) -> &'static [DoseUnit] {
        match self {
            Self::Salt => &[DoseUnit::Pounds, DoseUnit::Bags],
            Self::LiquidChlorine | Self::MuriaticAcid => {
                &[DoseUnit::FluidOunces, DoseUnit::Gallons]
            }
            _ => &[DoseUnit::Pounds, DoseUnit::Ounces],
        }
    }

    /// Level change per base unit in 10,000 gallons, for an amount added.
    pub fn effect_rate(self) -> f64 {
        match self {
            Self::Salt => SALT_PPM_PER_POUND,
            // 1 fl oz per 1,000 gal raises FC by 1 ppm
            Self::LiquidChlorine => 0.1,
            Self::PowderChlorine => 10.0,
            Self::GranularChlorine => 8.0,
            Self::SodaAsh => 0.2,
            Self::MuriaticAcid => -0.2,
            Self::SodiumBicarbonate | Self::CalciumChloride | Self::Stabilizer => 10.0,
        }
    }

    /// Level change per base unit in 10,000 gallons, when solving for a
    /// target. `None` for products that only move a level down.
    ///
    /// pH, alkalinity, calcium and CYA use dosing-chart figures here that do
    /// not invert `effect_rate`. Both sets are kept as field-observed values
    /// until the product owners settle on one.
    pub fn target_rate(self) -> Option<f64> {
        match self {
            Self::Salt
            | Self::LiquidChlorine
            | Self::PowderChlorine
            | Self::GranularChlorine => Some(self.effect_rate()),
            // lb = delta_ph * 0.0002 * gallons
            Self::SodaAsh => Some(0.5),
            Self::MuriaticAcid => None,
            // 1.5 lb per 10 ppm
            Self::SodiumBicarbonate => Some(10.0 / 1.5),
            // 1.25 lb per 10 ppm
            Self::CalciumChloride => Some(10.0 / 1.25),
            // 13 oz per 10 ppm
            Self::Stabilizer => Some(10.0 / 0.8125),
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Product {
    type Err = ChemistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "salt" => Ok(Self::Salt),
            "liquid" => Ok(Self::LiquidChlorine),
            "powder" => Ok(Self::PowderChlorine),
            "granular" => Ok(Self::GranularChlorine),
            "soda_ash" => Ok(Self::SodaAsh),
            "muriatic_acid" => Ok(Self::MuriaticAcid),
            "sodium_bicarbonate" => Ok(Self::SodiumBicarbonate),
            "calcium_chloride" => Ok(Self::CalciumChloride),
            "stabilizer" => Ok(Self::Stabilizer),
            other => Err(ChemistryError::validation(
                "chemical_type",
                format!("unrecognized chemical type '{other}'"),
            )),
        }
    }
}

impl TryFrom<String> for Product {
    type Error = ChemistryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Pick the product for a request, enforcing that it belongs to `chemical`.
pub fn resolve_product(
    chemical: Chemical,
    product: Option<Product>,
    target_mode: bool,
) -> Result<Product> {
    match product.or(chemical.default_product(target_mode)) {
        Some(p) if p.chemical() == chemical => Ok(p),
        Some(p) => Err(ChemistryError::validation(
            "chemical_type",
            format!("'{p}' does not adjust {chemical}"),
        )),
        None => Err(ChemistryError::validation(
            "chemical_type",
            format!("a chemical type is required for {chemical} in this mode"),
        )),
    }
}
