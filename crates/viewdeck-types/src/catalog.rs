use crate::descriptor::ViewDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance of one catalog build cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub site_url: String,
    pub list_title: String,
    pub built_at: DateTime<Utc>,
    /// Build generation; later generations supersede earlier ones.
    pub generation: u64,
}

/// The displayed top-level sequence for one configured site/list pair.
///
/// Replaced wholesale on every rebuild; entries are never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub meta: CatalogMeta,
    /// Summary tile first, then the classified and filtered views.
    pub entries: Vec<ViewDescriptor>,
    /// Total record count of the secondary published library, fetched
    /// independently for use by a summary tile.
    pub published_total: usize,
}

impl Catalog {
    /// Catalog for the "not configured" state: no entries, no error.
    pub fn empty(site_url: &str, generation: u64) -> Self {
        Self {
            meta: CatalogMeta {
                site_url: site_url.to_string(),
                list_title: String::new(),
                built_at: Utc::now(),
                generation,
            },
            entries: Vec::new(),
            published_total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
