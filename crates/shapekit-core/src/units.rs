//! Unit handling
//!
//! Angles are stored in radians. They can be built from, formatted in and
//! parsed from either degrees or radians. No normalization is ever applied:
//! `Angle::degrees(450.0)` stays 450 degrees, and differences are plain
//! subtraction.

use crate::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Angle unit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Degrees (360 per turn)
    #[default]
    Degrees,
    /// Radians (2π per turn)
    Radians,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(get_unit_label(*self))
    }
}

impl FromStr for AngleUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deg" | "degree" | "degrees" | "°" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            other => Err(UnitError::UnknownUnit {
                unit: other.to_string(),
            }),
        }
    }
}

/// A rotation amount, stored in radians.
///
/// Serialized as a number of degrees; deserialized from either a number of
/// degrees or a string with a unit suffix such as `"90deg"` or `"1.5rad"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(into = "AngleRepr", try_from = "AngleRepr")]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    pub fn to_radians(self) -> f64 {
        self.radians
    }

    pub fn to_degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    /// Returns true if both angles are within `epsilon` radians of each other
    pub fn approx_eq(self, other: Angle, epsilon: f64) -> bool {
        (self.radians - other.radians).abs() <= epsilon
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_angle(*self, AngleUnit::Degrees))
    }
}

impl FromStr for Angle {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_angle(s, AngleUnit::Degrees)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AngleRepr {
    Degrees(f64),
    Text(String),
}

impl From<Angle> for AngleRepr {
    fn from(angle: Angle) -> Self {
        AngleRepr::Degrees(angle.to_degrees())
    }
}

impl TryFrom<AngleRepr> for Angle {
    type Error = UnitError;

    fn try_from(repr: AngleRepr) -> Result<Self, Self::Error> {
        match repr {
            AngleRepr::Degrees(value) if value.is_finite() => Ok(Angle::degrees(value)),
            AngleRepr::Degrees(value) => Err(UnitError::NotFinite { value }),
            AngleRepr::Text(text) => parse_angle(&text, AngleUnit::Degrees),
        }
    }
}

/// Format angle value for display
///
/// * `angle` - Angle to format
/// * `unit` - Target unit
pub fn format_angle(angle: Angle, unit: AngleUnit) -> String {
    let value = match unit {
        AngleUnit::Degrees => angle.to_degrees(),
        AngleUnit::Radians => angle.to_radians(),
    };
    format!("{:.3}{}", value, get_unit_label(unit))
}

/// Parse angle string
///
/// Accepts an optional `deg`/`rad` (or `°`) suffix. Without a suffix the
/// value is read in `default_unit`.
pub fn parse_angle(input: &str, default_unit: AngleUnit) -> Result<Angle, UnitError> {
    let input = input.trim();
    let number = input.trim_end_matches(|c: char| c.is_alphabetic() || c == '°');
    let suffix = &input[number.len()..];

    let unit = if suffix.trim().is_empty() {
        default_unit
    } else {
        suffix.parse::<AngleUnit>()?
    };

    let value = number
        .trim()
        .parse::<f64>()
        .map_err(|_| UnitError::InvalidNumber {
            input: input.to_string(),
        })?;
    if !value.is_finite() {
        return Err(UnitError::NotFinite { value });
    }

    Ok(match unit {
        AngleUnit::Degrees => Angle::degrees(value),
        AngleUnit::Radians => Angle::radians(value),
    })
}

/// Get the unit label for the given unit ("deg" or "rad")
pub fn get_unit_label(unit: AngleUnit) -> &'static str {
    match unit {
        AngleUnit::Degrees => "deg",
        AngleUnit::Radians => "rad",
    }
}
