use foundation::LatLng;

/// Monotonically increasing selection generation, compared at commit time to
/// discard responses that belong to a superseded selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionToken(pub u64);

/// The user-chosen coordinate driving all panel content.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectedPoint {
    pub coord: LatLng,
    pub token: SelectionToken,
}

/// Owns the at-most-one selected point.
///
/// Ordering contract:
/// - `select` always returns a strictly greater token than any previous call.
/// - `is_current` is true only for the token of the latest `select`.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    generation: u64,
    current: Option<SelectedPoint>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection (the previous point, if any, is discarded) and
    /// returns the new token for downstream consumers.
    pub fn select(&mut self, coord: LatLng) -> SelectionToken {
        self.generation += 1;
        let token = SelectionToken(self.generation);
        self.current = Some(SelectedPoint { coord, token });
        token
    }

    pub fn current(&self) -> Option<SelectedPoint> {
        self.current
    }

    /// Whether `token` belongs to the latest selection.
    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.current.is_some_and(|p| p.token == token)
    }
}
