//! Maps an LSI value onto a water-balance band.

use super::models::{LsiInterpretation, LsiStatus};

struct Band {
    status: LsiStatus,
    label: &'static str,
    description: &'static str,
    recommendations: &'static [&'static str],
}

const HIGHLY_CORROSIVE: Band = Band {
    status: LsiStatus::HighlyCorrosive,
    label: "Highly Corrosive",
    description: "Water is extremely aggressive and will quickly etch plaster, grout and metal fittings.",
    recommendations: &[
        "Increase pH",
        "Increase total alkalinity",
        "Increase calcium hardness",
        "Retest within 24 hours",
    ],
};

const CORROSIVE: Band = Band {
    status: LsiStatus::Corrosive,
    label: "Corrosive",
    description: "Water is corrosive and will dissolve calcium from plaster and grout.",
    recommendations: &[
        "Increase pH",
        "Increase total alkalinity",
        "Increase calcium hardness",
    ],
};

const SLIGHTLY_CORROSIVE: Band = Band {
    status: LsiStatus::SlightlyCorrosive,
    label: "Slightly Corrosive",
    description: "Water is slightly corrosive; minor etching is possible over time.",
    recommendations: &["Raise pH slightly", "Consider increasing calcium hardness"],
};

const BALANCED: Band = Band {
    status: LsiStatus::Balanced,
    label: "Balanced",
    description: "Water is balanced. No adjustment needed.",
    recommendations: &["Maintain current chemical levels", "Continue regular testing"],
};

const SLIGHTLY_SCALE_FORMING: Band = Band {
    status: LsiStatus::SlightlyScaleForming,
    label: "Slightly Scale-Forming",
    description: "Water is slightly scale-forming; light scaling may appear at the tile line.",
    recommendations: &["Lower pH slightly", "Monitor tile line and fittings for scale"],
};

const SCALE_FORMING: Band = Band {
    status: LsiStatus::ScaleForming,
    label: "Scale-Forming",
    description: "Water is scale-forming and will deposit calcium on surfaces and equipment.",
    recommendations: &[
        "Lower pH",
        "Reduce alkalinity",
        "Check heater and salt cell for scale",
    ],
};

const HIGHLY_SCALE_FORMING: Band = Band {
    status: LsiStatus::HighlyScaleForming,
    label: "Highly Scale-Forming",
    description: "Water is heavily scale-forming; rapid scaling and cloudy water are likely.",
    recommendations: &[
        "Lower pH",
        "Reduce alkalinity",
        "Partially drain and refill to lower calcium hardness",
        "Clean salt cell and heater",
    ],
};

fn band(lsi: f64) -> &'static Band {
    if lsi < -2.0 {
        &HIGHLY_CORROSIVE
    } else if lsi < -0.5 {
        &CORROSIVE
    } else if lsi < -0.3 {
        &SLIGHTLY_CORROSIVE
    } else if lsi <= 0.3 {
        &BALANCED
    } else if lsi <= 0.5 {
        &SLIGHTLY_SCALE_FORMING
    } else if lsi <= 2.0 {
        &SCALE_FORMING
    } else {
        &HIGHLY_SCALE_FORMING
    }
}

/// Classify an LSI value.
pub fn interpret(lsi: f64) -> LsiInterpretation {
    let band = band(lsi);
    LsiInterpretation {
        status: band.status,
        label: band.label,
        description: band.description,
        recommendations: band.recommendations,
    }
}
