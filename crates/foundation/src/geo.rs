/// Mean Earth radius used for surface distances (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Coordinate tolerance for matching a facility card to its map marker
/// (degrees). Two points closer than this are treated as the same place.
pub const MARKER_MATCH_EPS_DEG: f64 = 1e-5;

/// Geographic coordinate in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl LatLng {
    pub const fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }

    /// Great-circle distance to `other` in meters (haversine).
    pub fn distance_m(self, other: LatLng) -> f64 {
        let lat1 = self.lat_deg.to_radians();
        let lat2 = other.lat_deg.to_radians();
        let dlat = (other.lat_deg - self.lat_deg).to_radians();
        let dlng = (other.lng_deg - self.lng_deg).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * a.sqrt().asin() * EARTH_RADIUS_M
    }

    /// Per-axis coordinate equality within `eps_deg` degrees.
    ///
    /// This is intentionally a box test, not a distance test, to match how
    /// the map bridge resolves a clicked facility card to its marker.
    pub fn approx_eq(self, other: LatLng, eps_deg: f64) -> bool {
        (self.lat_deg - other.lat_deg).abs() < eps_deg
            && (self.lng_deg - other.lng_deg).abs() < eps_deg
    }
}
