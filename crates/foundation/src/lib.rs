pub mod format;
pub mod geo;

// Foundation crate: small, well-tested primitives only.
pub use format::*;
pub use geo::*;
