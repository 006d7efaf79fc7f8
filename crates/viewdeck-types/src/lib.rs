pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod raw;
mod util;

pub use catalog::{Catalog, CatalogMeta};
pub use descriptor::{Classification, StatusColor, ViewDescriptor};
pub use error::{Error, Result};
pub use raw::{ListRecord, RawView, ViewDetail};
pub use util::coalesce_field;

/// Synthetic id for the summary tile representing the configured library.
pub const WORKING_DOCUMENT_TILE: &str = "working-document";

/// Synthetic id for the summary tile representing the published library.
pub const PUBLISHED_DOCUMENTS_TILE: &str = "published-documents";

/// Display name of the secondary library whose total is always fetched.
pub const PUBLISHED_DOCUMENTS_LIST: &str = "Published Documents";

/// Row cap applied to every unfiltered or filtered record fetch.
///
/// Counts against lists larger than this are a known accuracy limitation;
/// the service truncates result sets at this bound.
pub const ROW_CAP: usize = 5000;

/// Moderation-status field names tried in order when a list stores its
/// approval state under a non-standard column. The third entry is the
/// localized approval-status column some list configurations carry.
pub const MODERATION_FIELDS: [&str; 4] = [
    "_ModerationStatus",
    "ModerationStatus",
    "Approval_x0020_Status",
    "ApprovalStatus",
];

/// View titles that are never surfaced, matched as lowercase substrings.
pub const DENYLISTED_TITLES: [&str; 4] = [
    "merge documents",
    "relink documents",
    "all documents",
    "assetlibtemp",
];

/// True if `id` names one of the two synthetic summary tiles.
pub fn is_summary_tile(id: &str) -> bool {
    id == WORKING_DOCUMENT_TILE || id == PUBLISHED_DOCUMENTS_TILE
}
