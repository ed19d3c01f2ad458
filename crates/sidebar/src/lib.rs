//! Map/sidebar state synchronization.
//!
//! This crate is the single source of truth for what the sidebar shows:
//! the current selection, the three independently-loading panels, and the
//! facility marker overlay. It performs no IO; the app crate feeds decoded
//! responses in, tagged with the selection token that initiated them, and
//! commits carrying a stale token are rejected.

pub mod facilities;
pub mod panel;
pub mod selection;

pub use facilities::{FacilityCategory, FacilityMarker, FacilityOverlay};
pub use panel::{
    FacilitiesPanel, FacilityCard, FacilityGroup, HazardEntry, HazardsPanel, LocationPanel,
    NearestSummary, PanelState, RiskSummary, Sidebar,
};
pub use selection::{SelectedPoint, SelectionToken, SelectionTracker};
