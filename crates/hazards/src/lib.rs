pub mod layer;
pub mod store;
pub mod susceptibility;
pub mod symbology;

pub use layer::{Footprint, HAZARD_KINDS, HazardFeature, HazardKind, HazardLayer};
pub use store::{HazardLayerStore, LoadOutcome};
pub use susceptibility::Susceptibility;
pub use symbology::{FeaturePaint, MissingCodeStyle, fill_color};
