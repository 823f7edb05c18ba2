//! Unique-visitor counter: fingerprinting, the persisted visitor registry,
//! count formatting and the count-up animation.

pub mod animation;
pub mod fingerprint;
pub mod format;
pub mod registry;

pub use animation::CountAnimation;
pub use fingerprint::{FingerprintSignals, VisitorFingerprint};
pub use format::format_view_count;
pub use registry::{RegistrySnapshot, VisitOutcome};
