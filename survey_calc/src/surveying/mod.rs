//! Surveying specific utilities.

pub mod two_point;
pub use two_point::{compute, compute_with, normalize_azimuth, round_to, SurveyResult};

pub mod generator;
pub use generator::{
    cases_to_json, generate_point, generate_two_point_case, CaseGenerator, TwoPointCase,
    DEFAULT_POINT_PREFIX,
};
