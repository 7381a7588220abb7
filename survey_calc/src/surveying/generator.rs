//! Random fixture generation for two-point survey cases.

use log::debug;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::two_point::{compute_with, round_to, SurveyResult};
use crate::config::{CoordRange, GeneratorConfig, Precision};
use crate::error::ConfigError;
use crate::geometry::Point3D;

/// Name prefix used when the caller has no preference.
pub const DEFAULT_POINT_PREFIX: &str = "P";

/// Start point, end point and the result expected from them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TwoPointCase {
    pub start: Point3D,
    pub end: Point3D,
    pub expected: SurveyResult,
}

impl TwoPointCase {
    /// Builds a case by computing the expected result from the two points.
    pub fn new(start: Point3D, end: Point3D) -> Self {
        let expected = super::two_point::compute(&start, &end);
        Self {
            start,
            end,
            expected,
        }
    }

    /// Serializes the case as pretty-printed JSON fixture text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Serializes a batch of cases as a JSON array.
pub fn cases_to_json(cases: &[TwoPointCase]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(cases)
}

fn sample_coord<R: Rng>(rng: &mut R, range: CoordRange, decimals: u32) -> f64 {
    if range.min == range.max {
        return range.min;
    }
    round_to(rng.gen_range(range.min..=range.max), decimals).clamp(range.min, range.max)
}

fn sample_point<R: Rng>(rng: &mut R, config: &GeneratorConfig, prefix: &str) -> Point3D {
    let id = rng.gen_range(config.id_range.min..=config.id_range.max);
    let n = sample_coord(rng, config.n_range, config.coordinate_decimals);
    let e = sample_coord(rng, config.e_range, config.coordinate_decimals);
    let z = sample_coord(rng, config.z_range, config.coordinate_decimals);
    Point3D::new(format!("{prefix}{id}"), n, e, z)
}

/// Generates a random point named `name_prefix` followed by a number in
/// `1..=9999`, using the thread-local RNG and the default extents.
pub fn generate_point(name_prefix: &str) -> Point3D {
    sample_point(&mut rand::thread_rng(), &GeneratorConfig::default(), name_prefix)
}

/// Generates a random start (`S`) and end (`E`) point with their expected
/// result.
pub fn generate_two_point_case() -> TwoPointCase {
    CaseGenerator::new().generate_two_point_case()
}

/// Random case generator owning its RNG and settings.
///
/// Use [`CaseGenerator::seeded`] for reproducible fixtures.
#[derive(Debug, Clone)]
pub struct CaseGenerator<R: Rng> {
    rng: R,
    config: GeneratorConfig,
    precision: Precision,
}

impl CaseGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG with default settings.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
            config: GeneratorConfig::default(),
            precision: Precision::default(),
        }
    }
}

impl Default for CaseGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseGenerator<StdRng> {
    /// Deterministic generator with default settings.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config: GeneratorConfig::default(),
            precision: Precision::default(),
        }
    }
}

impl<R: Rng> CaseGenerator<R> {
    /// Creates a generator from an RNG and a configuration, validating the
    /// configuration first.
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng,
            config,
            precision: Precision::default(),
        })
    }

    /// Sets the precision used for expected results, validating it first.
    pub fn with_precision(mut self, precision: Precision) -> Result<Self, ConfigError> {
        precision.validate()?;
        self.precision = precision;
        Ok(self)
    }

    /// Settings the generator samples points with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a single random point.
    pub fn generate_point(&mut self, name_prefix: &str) -> Point3D {
        sample_point(&mut self.rng, &self.config, name_prefix)
    }

    /// Generates a start and end point and computes their expected result.
    pub fn generate_two_point_case(&mut self) -> TwoPointCase {
        let start = sample_point(&mut self.rng, &self.config, &self.config.start_prefix);
        let end = sample_point(&mut self.rng, &self.config, &self.config.end_prefix);
        let expected = compute_with(&start, &end, &self.precision);
        debug!("generated case {} -> {}", start.name, end.name);
        TwoPointCase {
            start,
            end,
            expected,
        }
    }

    /// Generates `count` independent cases.
    pub fn generate_cases(&mut self, count: usize) -> Vec<TwoPointCase> {
        (0..count).map(|_| self.generate_two_point_case()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surveying::compute;

    #[test]
    fn point_name_has_prefix_and_id() {
        let p = generate_point(DEFAULT_POINT_PREFIX);
        let id: u32 = p.name.strip_prefix("P").unwrap().parse().unwrap();
        assert!((1..=9999).contains(&id));
    }

    #[test]
    fn case_uses_start_and_end_prefixes() {
        let case = generate_two_point_case();
        assert!(case.start.name.starts_with('S'));
        assert!(case.end.name.starts_with('E'));
        assert_eq!(case.expected, compute(&case.start, &case.end));
    }

    #[test]
    fn coordinates_keep_four_decimals() {
        let mut gen = CaseGenerator::seeded(7);
        for _ in 0..100 {
            let p = gen.generate_point("P");
            for v in [p.n, p.e, p.z] {
                assert_eq!(round_to(v, 4), v);
            }
        }
    }

    #[test]
    fn narrow_config_is_honored() {
        let config = GeneratorConfig {
            n_range: CoordRange::new(10.0, 10.0),
            e_range: CoordRange::new(-1.0, 1.0),
            z_range: CoordRange::new(0.0, 0.5),
            start_prefix: "BS".to_string(),
            end_prefix: "FS".to_string(),
            ..GeneratorConfig::default()
        };
        let mut gen = CaseGenerator::with_rng(StdRng::seed_from_u64(1), config).unwrap();
        let case = gen.generate_two_point_case();
        assert_eq!(case.start.n, 10.0);
        assert_eq!(case.end.n, 10.0);
        assert!(case.start.name.starts_with("BS"));
        assert!(case.end.name.starts_with("FS"));
        assert!(gen.config().e_range.contains(case.end.e));
    }

    #[test]
    fn oversized_precision_rejected() {
        let precision = Precision {
            percent: 40,
            ..Precision::default()
        };
        assert!(matches!(
            CaseGenerator::seeded(1).with_precision(precision),
            Err(ConfigError::InvalidDecimals { field: "percent", .. })
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = GeneratorConfig {
            z_range: CoordRange::new(f64::NAN, 1.0),
            ..GeneratorConfig::default()
        };
        assert!(CaseGenerator::with_rng(StdRng::seed_from_u64(1), config).is_err());
    }

    #[test]
    fn json_fixture_has_expected_keys() {
        let case = TwoPointCase::new(
            Point3D::new("S1", 0.0, 0.0, 0.0),
            Point3D::new("E1", 3.0, 4.0, 0.0),
        );
        let value: serde_json::Value = serde_json::from_str(&case.to_json().unwrap()).unwrap();
        assert_eq!(value["start"]["name"], "S1");
        assert_eq!(value["expected"]["azimuth"], 53.1301);
        assert_eq!(value["expected"]["slope_dist"], 5.0);
        assert_eq!(value["expected"]["dh"], 0.0);
    }
}
