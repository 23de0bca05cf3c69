//! Langelier Saturation Index and its inverse.
//!
//! ```text
//! temp_c = (temp_f - 32) * 5/9
//! A = (log10(tds) - 1) / 10
//! B = -13.12 * log10(temp_c + 273) + 34.55
//! C = log10(calcium) - 0.4
//! D = log10(alkalinity)
//! pHs = 9.3 + A + B - (C + D)
//! LSI = pH - pHs
//! ```

use super::models::{LsiFactors, LsiInput, LsiResult, LsiTargetInput, LsiTargetResult, Tds};
use crate::error::{
    require_non_negative, require_positive_reading, require_within, ChemistryError, Result,
};
use crate::tds::estimate_tds;
use crate::units::round_to;

pub const MIN_PH: f64 = 6.0;
pub const MAX_PH: f64 = 9.0;
pub const MIN_TEMP_F: f64 = 32.0;
pub const MAX_TEMP_F: f64 = 120.0;

/// Saturation pH with its unrounded terms.
struct Saturation {
    phs: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    temp_c: f64,
    tds: f64,
    tds_estimated: bool,
}

impl Saturation {
    fn factors(&self) -> LsiFactors {
        LsiFactors {
            a: round_to(self.a, 3),
            b: round_to(self.b, 2),
            c: round_to(self.c, 2),
            d: round_to(self.d, 2),
            temp_c: round_to(self.temp_c, 2),
        }
    }
}

/// Resolve the TDS figure. A measured value is used as given.
fn resolve_tds(tds: &Tds, calcium: f64, alkalinity: f64) -> Result<(f64, bool)> {
    match *tds {
        Tds::Measured { value } => Ok((require_positive_reading("tds", value)?, false)),
        Tds::Estimate { salt_ppm, cya_ppm } => {
            if let Some(salt) = salt_ppm {
                require_non_negative("salt_ppm", salt)?;
            }
            if let Some(cya) = cya_ppm {
                require_non_negative("cya_ppm", cya)?;
            }
            Ok((estimate_tds(calcium, alkalinity, salt_ppm, cya_ppm), true))
        }
    }
}

fn saturation(temp_f: f64, calcium: f64, alkalinity: f64, tds: &Tds) -> Result<Saturation> {
    require_within("temp_f", temp_f, MIN_TEMP_F, MAX_TEMP_F)?;
    require_positive_reading("calcium", calcium)?;
    require_positive_reading("alkalinity", alkalinity)?;
    let (tds, tds_estimated) = resolve_tds(tds, calcium, alkalinity)?;

    let temp_c = (temp_f - 32.0) * 5.0 / 9.0;
    let a = (tds.log10() - 1.0) / 10.0;
    let b = -13.12 * (temp_c + 273.0).log10() + 34.55;
    let c = calcium.log10() - 0.4;
    let d = alkalinity.log10();
    let phs = 9.3 + a + b - (c + d);

    Ok(Saturation {
        phs,
        a,
        b,
        c,
        d,
        temp_c,
        tds,
        tds_estimated,
    })
}

/// Compute the LSI for a set of water readings.
pub fn compute_lsi(input: &LsiInput) -> Result<LsiResult> {
    require_within("ph", input.ph, MIN_PH, MAX_PH)?;
    let sat = saturation(input.temp_f, input.calcium, input.alkalinity, &input.tds)?;

    Ok(LsiResult {
        lsi: round_to(input.ph - sat.phs, 2),
        phs: round_to(sat.phs, 2),
        factors: sat.factors(),
        tds: sat.tds,
        tds_estimated: sat.tds_estimated,
    })
}

/// Solve for the pH that yields `target_lsi` with the other readings fixed.
pub fn compute_target_ph(input: &LsiTargetInput) -> Result<LsiTargetResult> {
    if !input.target_lsi.is_finite() {
        return Err(ChemistryError::validation(
            "target_lsi",
            "must be a finite number",
        ));
    }
    let sat = saturation(input.temp_f, input.calcium, input.alkalinity, &input.tds)?;
    let target_ph = round_to(input.target_lsi + sat.phs, 2);

    let mut warnings = Vec::new();
    if !(MIN_PH..=MAX_PH).contains(&target_ph) {
        warnings.push(format!(
            "target pH {target_ph} is outside the {MIN_PH:.1}-{MAX_PH:.1} range; adjust calcium or alkalinity instead"
        ));
    }

    Ok(LsiTargetResult {
        target_ph,
        phs: round_to(sat.phs, 2),
        factors: sat.factors(),
        tds: sat.tds,
        tds_estimated: sat.tds_estimated,
        warnings,
    })
}
