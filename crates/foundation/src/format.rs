/// Formats a distance for display: meters below 1 km, else one-decimal km.
pub fn format_distance_m(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Formats a coordinate component to six decimal places (~0.1 m).
pub fn format_coord(deg: f64) -> String {
    format!("{deg:.6}")
}
