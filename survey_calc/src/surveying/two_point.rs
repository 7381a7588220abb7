//! Theoretical result of observing one survey point from another.

use std::fmt;

use log::{debug, trace};

use crate::config::{Precision, MAX_DECIMALS};
use crate::geometry::{horizontal_distance, Point3D};
use crate::styles::format_dms;

/// Quantities derived from a start and an end point.
///
/// All values are rounded according to the [`Precision`] used to compute
/// them. Azimuth is in decimal degrees clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurveyResult {
    pub azimuth: f64,
    pub horizontal: f64,
    pub slope_dist: f64,
    pub vertical: f64,
    /// Height difference, identical to `vertical`.
    pub dh: f64,
    pub slope_ratio: f64,
    pub slope_percent: f64,
    pub north_offset: f64,
    pub east_offset: f64,
}

impl fmt::Display for SurveyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Az {} HD {:.4} SD {:.4} VD {:.4} Grade {:.2}%",
            format_dms(self.azimuth),
            self.horizontal,
            self.slope_dist,
            self.vertical,
            self.slope_percent
        )
    }
}

/// Rounds `value` to `decimals` places from its exact decimal expansion.
/// Negative zero is returned as positive zero. Non-finite values and
/// precisions beyond [`MAX_DECIMALS`] are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || decimals > MAX_DECIMALS {
        return value;
    }
    format!("{value:.prec$}", prec = decimals as usize)
        .parse::<f64>()
        .map_or(value, |rounded| rounded + 0.0)
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_azimuth(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a + 0.0
    }
}

/// Computes the survey result from `start` to `end` with default precision.
pub fn compute(start: &Point3D, end: &Point3D) -> SurveyResult {
    compute_with(start, end, &Precision::default())
}

/// Computes the survey result from `start` to `end`, rounding each output
/// field once according to `precision`.
pub fn compute_with(start: &Point3D, end: &Point3D, precision: &Precision) -> SurveyResult {
    let dn = end.n - start.n;
    let de = end.e - start.e;
    let dz = end.z - start.z;

    let horizontal = horizontal_distance(start, end);
    let slope_dist = horizontal.hypot(dz);

    let (percent, ratio) = if horizontal != 0.0 {
        (dz.abs() / horizontal * 100.0, slope_dist / horizontal)
    } else {
        debug!(
            "{} and {} share plan position; grade reported as 0",
            start.name, end.name
        );
        (0.0, 0.0)
    };

    let azimuth = normalize_azimuth(round_to(
        normalize_azimuth(de.atan2(dn).to_degrees()),
        precision.angular,
    ));

    let result = SurveyResult {
        azimuth,
        horizontal: round_to(horizontal, precision.linear),
        slope_dist: round_to(slope_dist, precision.linear),
        vertical: round_to(dz, precision.linear),
        dh: round_to(dz, precision.linear),
        slope_ratio: round_to(ratio, precision.linear),
        slope_percent: round_to(percent, precision.percent),
        north_offset: round_to(dn, precision.linear),
        east_offset: round_to(de, precision.linear),
    };
    trace!("{} -> {}: {}", start.name, end.name, result);
    result
}
