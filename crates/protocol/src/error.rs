/// Failure modes of a single collaborator round trip.
///
/// Every panel and layer catches its own `FetchError` and substitutes a
/// fallback render; none of these is fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (rejected, timed out, offline).
    Network(String),
    /// The collaborator answered with a non-success status.
    Status(u16),
    /// The response body did not match the documented contract.
    Decode(String),
    /// The collaborator answered successfully with zero matches.
    Empty,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status(code) => write!(f, "unexpected status {code}"),
            FetchError::Decode(msg) => write!(f, "malformed response: {msg}"),
            FetchError::Empty => write!(f, "no results"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn display_is_plain_language() {
        assert_eq!(FetchError::Status(502).to_string(), "unexpected status 502");
        assert_eq!(FetchError::Empty.to_string(), "no results");
        assert_eq!(
            FetchError::Network("timed out".into()).to_string(),
            "network error: timed out"
        );
    }
}
