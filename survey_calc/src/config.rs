//! Output precision and random generator settings.

use crate::error::ConfigError;

/// Largest number of decimal places an `f64` can meaningfully carry.
pub const MAX_DECIMALS: u32 = 15;

fn check_decimals(field: &'static str, decimals: u32) -> Result<(), ConfigError> {
    if decimals > MAX_DECIMALS {
        return Err(ConfigError::InvalidDecimals {
            field,
            decimals,
            max: MAX_DECIMALS,
        });
    }
    Ok(())
}

/// Number of decimal places kept in computed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Precision {
    /// Distances, offsets, vertical difference and slope ratio.
    pub linear: u32,
    /// Azimuth in decimal degrees.
    pub angular: u32,
    /// Slope percent.
    pub percent: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            linear: 4,
            angular: 4,
            percent: 2,
        }
    }
}

impl Precision {
    /// Checks that every field is within [`MAX_DECIMALS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_decimals("linear", self.linear)?;
        check_decimals("angular", self.angular)?;
        check_decimals("percent", self.percent)
    }
}

/// Closed interval used for uniform coordinate sampling.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoordRange {
    pub min: f64,
    pub max: f64,
}

impl CoordRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, axis: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Inclusive range of the numeric suffix appended to generated point names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IdRange {
    pub min: u32,
    pub max: u32,
}

/// Settings for the random case generator.
///
/// The defaults describe a large national-grid style extent: northings in
/// ±5,000,000, eastings in ±500,000 and elevations in ±9,000.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub n_range: CoordRange,
    pub e_range: CoordRange,
    pub z_range: CoordRange,
    pub id_range: IdRange,
    /// Decimal places kept on generated coordinates.
    pub coordinate_decimals: u32,
    pub start_prefix: String,
    pub end_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_range: CoordRange::new(-5_000_000.0, 5_000_000.0),
            e_range: CoordRange::new(-500_000.0, 500_000.0),
            z_range: CoordRange::new(-9_000.0, 9_000.0),
            id_range: IdRange { min: 1, max: 9999 },
            coordinate_decimals: 4,
            start_prefix: "S".to_string(),
            end_prefix: "E".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every range is finite and ordered and that the
    /// coordinate precision is representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_decimals("coordinate", self.coordinate_decimals)?;
        self.n_range.validate("northing")?;
        self.e_range.validate("easting")?;
        self.z_range.validate("elevation")?;
        if self.id_range.min > self.id_range.max {
            return Err(ConfigError::InvalidIdRange {
                min: self.id_range.min,
                max: self.id_range.max,
            });
        }
        Ok(())
    }
}
