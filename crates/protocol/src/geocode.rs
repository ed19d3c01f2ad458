use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One Nominatim search result. Nominatim encodes coordinates as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

impl GeocodeCandidate {
    /// Parses the string-encoded coordinate pair.
    pub fn coords(&self) -> Result<(f64, f64), FetchError> {
        let lat = self
            .lat
            .parse::<f64>()
            .map_err(|e| FetchError::Decode(format!("bad lat {:?}: {e}", self.lat)))?;
        let lng = self
            .lon
            .parse::<f64>()
            .map_err(|e| FetchError::Decode(format!("bad lon {:?}: {e}", self.lon)))?;
        Ok((lat, lng))
    }
}

/// Picks the top-ranked candidate, mapping an empty result list to
/// `FetchError::Empty` so callers surface a user-visible not-found signal.
pub fn first_candidate(results: Vec<GeocodeCandidate>) -> Result<GeocodeCandidate, FetchError> {
    results.into_iter().next().ok_or(FetchError::Empty)
}

#[cfg(test)]
mod tests {
    use super::{GeocodeCandidate, first_candidate};
    use crate::error::FetchError;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_nominatim_results() {
        let body = r#"[
            {"lat": "9.3068", "lon": "123.3054", "display_name": "Dumaguete, Negros Oriental, Philippines"},
            {"lat": "9.59", "lon": "123.12", "display_name": "Bais, Negros Oriental, Philippines"}
        ]"#;
        let results: Vec<GeocodeCandidate> = serde_json::from_str(body).unwrap();
        assert_eq!(results.len(), 2);

        let best = first_candidate(results).unwrap();
        assert_eq!(best.coords().unwrap(), (9.3068, 123.3054));
    }

    #[test]
    fn empty_results_are_an_empty_error() {
        assert_eq!(first_candidate(Vec::new()), Err(FetchError::Empty));
    }

    #[test]
    fn unparsable_coordinate_is_a_decode_error() {
        let candidate = GeocodeCandidate {
            lat: "not-a-number".into(),
            lon: "123.3".into(),
            display_name: String::new(),
        };
        assert!(matches!(candidate.coords(), Err(FetchError::Decode(_))));
    }
}
