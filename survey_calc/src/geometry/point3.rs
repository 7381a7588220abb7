//! Named 3D survey point in northing/easting/elevation order.

/// Representation of a surveyed point on a local grid.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3D {
    pub name: String,
    /// Northing.
    pub n: f64,
    /// Easting.
    pub e: f64,
    /// Elevation.
    pub z: f64,
}

impl Point3D {
    pub fn new(name: impl Into<String>, n: f64, e: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            n,
            e,
            z,
        }
    }

    /// Creates an unnamed point.
    pub fn unnamed(n: f64, e: f64, z: f64) -> Self {
        Self::new(String::new(), n, e, z)
    }
}
