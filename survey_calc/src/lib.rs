//! Core library for two-point survey computations.
//!
//! Computes the theoretical result between two surveyed points and produces
//! randomized fixture cases pairing two points with that expected result.

pub mod config;
pub mod error;
pub mod geometry;
pub mod styles;
pub mod surveying;

pub use config::{CoordRange, GeneratorConfig, IdRange, Precision};
pub use error::ConfigError;
pub use geometry::Point3D;
pub use surveying::{
    compute, compute_with, generate_point, generate_two_point_case, CaseGenerator, SurveyResult,
    TwoPointCase,
};
