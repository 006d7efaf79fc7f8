// Engine module - Pure classification and filtering logic
// This layer sits between raw service data (types) and runtime orchestration

pub mod classify;
pub mod filter;
pub mod navigate;

pub use classify::{classify, matching_rule, Rule, RuleLabel, RULES};
pub use filter::{filter_views, is_surfaced};
pub use navigate::{navigation_target, summary_tile_target};

use viewdeck_types::{Classification, ViewDescriptor};

// Façade API - Stable public interface for the runtime layer

/// Attach a classification to a descriptor, consuming it.
pub fn classify_descriptor(mut descriptor: ViewDescriptor) -> ViewDescriptor {
    let classification: Classification = classify(&descriptor.title);
    descriptor.classification = Some(classification);
    descriptor
}
