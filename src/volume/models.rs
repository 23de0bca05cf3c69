//! Data types for pool volume calculation.

use serde::{Deserialize, Serialize};

use crate::error::{ChemistryError, Result};

/// Recognized pool shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangular,
    Circular,
    Oval,
    Kidney,
}

impl std::str::FromStr for ShapeKind {
    type Err = ChemistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Ok(Self::Rectangular),
            "circular" => Ok(Self::Circular),
            "oval" => Ok(Self::Oval),
            "kidney" => Ok(Self::Kidney),
            other => Err(ChemistryError::invalid_dimension(
                "shape",
                format!("unrecognized pool shape '{other}'"),
            )),
        }
    }
}

/// Shape with exactly the dimensions it needs, in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoolShape {
    Rectangular { length: f64, width: f64 },
    Circular { diameter: f64 },
    Oval { length: f64, width: f64 },
    /// Freeform/kidney pools, approximated from their bounding box.
    Kidney { length: f64, width: f64 },
}

impl PoolShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangular { .. } => ShapeKind::Rectangular,
            Self::Circular { .. } => ShapeKind::Circular,
            Self::Oval { .. } => ShapeKind::Oval,
            Self::Kidney { .. } => ShapeKind::Kidney,
        }
    }
}

/// Validated volume input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolShapeSpec {
    pub shape: PoolShape,
    /// Average depth in feet
    pub avg_depth: f64,
}

/// Loose form of a pool's geometry as it arrives from a form or API call.
///
/// Only the fields the chosen shape needs are read.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PoolDimensions {
    pub shape: String,
    #[serde(
        default,
        alias = "ovalLength",
        alias = "kidneyLength",
        alias = "oval_length",
        alias = "kidney_length"
    )]
    pub length: Option<f64>,
    #[serde(
        default,
        alias = "ovalWidth",
        alias = "kidneyWidth",
        alias = "oval_width",
        alias = "kidney_width"
    )]
    pub width: Option<f64>,
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default, alias = "avgDepth")]
    pub avg_depth: Option<f64>,
}

fn required(field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| ChemistryError::invalid_dimension(field, "is required for this shape"))
}

impl TryFrom<&PoolDimensions> for PoolShapeSpec {
    type Error = ChemistryError;

    fn try_from(dims: &PoolDimensions) -> Result<Self> {
        let kind: ShapeKind = dims.shape.parse()?;
        let shape = match kind {
            ShapeKind::Rectangular => PoolShape::Rectangular {
                length: required("length", dims.length)?,
                width: required("width", dims.width)?,
            },
            ShapeKind::Circular => PoolShape::Circular {
                diameter: required("diameter", dims.diameter)?,
            },
            ShapeKind::Oval => PoolShape::Oval {
                length: required("length", dims.length)?,
                width: required("width", dims.width)?,
            },
            ShapeKind::Kidney => PoolShape::Kidney {
                length: required("length", dims.length)?,
                width: required("width", dims.width)?,
            },
        };
        Ok(PoolShapeSpec {
            shape,
            avg_depth: required("avg_depth", dims.avg_depth)?,
        })
    }
}

/// Computed pool volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolVolumeResult {
    /// Volume in cubic feet, 2 decimals
    pub cubic_feet: f64,
    /// Volume in US gallons, nearest whole gallon
    pub gallons: f64,
    /// Water surface area in square feet, 2 decimals
    pub surface_area: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_is_invalid_dimension() {
        let dims = PoolDimensions {
            shape: "hexagonal".into(),
            ..Default::default()
        };
        let err = PoolShapeSpec::try_from(&dims).unwrap_err();
        assert!(matches!(err, ChemistryError::InvalidDimension { field: "shape", .. }));
    }

    #[test]
    fn test_missing_dimension_names_field() {
        let dims = PoolDimensions {
            shape: "circular".into(),
            avg_depth: Some(4.0),
            ..Default::default()
        };
        let err = PoolShapeSpec::try_from(&dims).unwrap_err();
        assert_eq!(err.field(), "diameter");
    }

    #[test]
    fn test_kidney_aliases() {
        let dims: PoolDimensions = serde_json::from_str(
            r#"{"shape": "kidney", "kidneyLength": 30, "kidneyWidth": 15, "avgDepth": 4.5}"#,
        )
        .unwrap();
        let spec = PoolShapeSpec::try_from(&dims).unwrap();
        assert_eq!(spec.shape, PoolShape::Kidney { length: 30.0, width: 15.0 });
        assert_eq!(spec.avg_depth, 4.5);
        assert_eq!(spec.shape.kind(), ShapeKind::Kidney);
    }
}
