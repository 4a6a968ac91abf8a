use serde::{Deserialize, Serialize};

/// Represents a geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate from latitude/longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate from longitude/latitude in degrees
    pub fn from_lonlat(longitude: f64, latitude: f64) -> Self {
        Self::new(latitude, longitude)
    }

    /// Returns true when latitude is within [-90, 90] and longitude within [-180, 180]
    ///
    /// The geodesy functions never call this; they accept any real input.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lonlat_swaps_arguments() {
        let coord = Coordinate::from_lonlat(-2.23715, 53.48097);
        assert_eq!(coord.latitude, 53.48097);
        assert_eq!(coord.longitude, -2.23715);
    }

    #[test]
    fn test_is_valid() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_display() {
        let coord = Coordinate::new(51.5, -0.125);
        assert_eq!(coord.to_string(), "(51.500000, -0.125000)");
    }
}
