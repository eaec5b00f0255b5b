//! Models shared by the geocoder and the timezone resolver.

/// A point on the globe in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved IANA timezone, e.g. `Europe/London`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneName(pub String);

impl TimezoneName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TimezoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
