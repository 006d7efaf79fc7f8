//! Dashboard façade: single owner of the catalog and expansion state.
//!
//! All state lives behind this type and is replaced wholesale on each
//! rebuild. Rebuilds are generation-tagged: when two builds overlap, only
//! the newest generation is allowed to commit, so a stale in-flight build
//! can never overwrite the result of a later reconfiguration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use viewdeck_providers::ListService;
use viewdeck_types::{
    Catalog, PUBLISHED_DOCUMENTS_LIST, PUBLISHED_DOCUMENTS_TILE, ViewDescriptor,
};

use crate::catalog::{build_catalog, nested_views};
use crate::config::Config;
use crate::error::Result;
use crate::expansion::{ExpansionState, ToggleOutcome};

/// Outcome of one tile toggle as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileToggle {
    /// The tile is now collapsed.
    Collapsed,
    /// The tile expanded and its nested views are in place.
    Expanded,
    /// The tile was collapsed (or re-toggled) while the nested fetch was
    /// in flight; the fetched result was discarded.
    Superseded,
    /// Not a summary tile.
    Ignored,
}

struct State {
    catalog: Catalog,
    expansion: ExpansionState,
}

/// The one state owner for a configured dashboard.
pub struct Dashboard<S: ListService> {
    service: Arc<S>,
    config: Mutex<Config>,
    state: Mutex<State>,
    generation: AtomicU64,
}

// The state mutex is only ever held for synchronous transitions; it is
// released before every await point.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: ListService> Dashboard<S> {
    pub fn new(service: Arc<S>, config: Config) -> Self {
        let catalog = Catalog::empty(&config.site_url, 0);
        Self {
            service,
            config: Mutex::new(config),
            state: Mutex::new(State {
                catalog,
                expansion: ExpansionState::new(),
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Rebuilds the catalog for the current configuration.
    ///
    /// The build result is committed only while its generation is still
    /// the newest; a build superseded mid-flight is returned to its own
    /// caller but leaves the shared catalog untouched.
    pub async fn reload(&self) -> Result<Catalog> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let config = lock(&self.config).clone();

        let catalog = build_catalog(
            self.service.as_ref(),
            &config.site_url,
            &config.list_title,
            ticket,
        )
        .await?;

        let mut state = lock(&self.state);
        if catalog.meta.generation >= state.catalog.meta.generation
            && ticket == self.generation.load(Ordering::SeqCst)
        {
            state.catalog = catalog.clone();
        }
        Ok(catalog)
    }

    /// Swaps the (site, list) configuration and rebuilds.
    pub async fn reconfigure(&self, config: Config) -> Result<Catalog> {
        *lock(&self.config) = config;
        self.reload().await
    }

    /// Snapshot of the current committed catalog.
    pub fn catalog(&self) -> Catalog {
        lock(&self.state).catalog.clone()
    }

    pub fn config(&self) -> Config {
        lock(&self.config).clone()
    }

    /// Applies one user toggle. Expansion runs the tile's nested fetch to
    /// completion; collapse and non-summary toggles return immediately.
    pub async fn toggle_tile(&self, tile_id: &str) -> TileToggle {
        let outcome = lock(&self.state).expansion.toggle(tile_id);
        let ticket = match outcome {
            ToggleOutcome::Collapsed => return TileToggle::Collapsed,
            ToggleOutcome::Ignored => return TileToggle::Ignored,
            ToggleOutcome::ExpandRequested(ticket) => ticket,
        };

        let (site_url, list_title) = {
            let config = lock(&self.config);
            (config.site_url.clone(), backing_list(tile_id, &config))
        };
        let views = nested_views(self.service.as_ref(), &site_url, &list_title).await;

        if lock(&self.state).expansion.complete(&ticket, views) {
            TileToggle::Expanded
        } else {
            TileToggle::Superseded
        }
    }

    pub fn is_tile_expanded(&self, tile_id: &str) -> bool {
        lock(&self.state).expansion.is_expanded(tile_id)
    }

    pub fn is_tile_loading(&self, tile_id: &str) -> bool {
        lock(&self.state).expansion.is_loading(tile_id)
    }

    /// Nested views of a tile's most recent completed expansion.
    pub fn tile_views(&self, tile_id: &str) -> Vec<ViewDescriptor> {
        lock(&self.state).expansion.nested_views(tile_id).to_vec()
    }
}

/// The list a summary tile's nested fetch runs against.
fn backing_list(tile_id: &str, config: &Config) -> String {
    if tile_id == PUBLISHED_DOCUMENTS_TILE {
        PUBLISHED_DOCUMENTS_LIST.to_string()
    } else {
        config.list_title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use viewdeck_providers::FixtureHost;
    use viewdeck_types::WORKING_DOCUMENT_TILE;

    const SITE: &str = "https://tenant.example.com/sites/docs";

    fn dashboard() -> Dashboard<FixtureHost> {
        let fixture = json!({
            "site_url": SITE,
            "lists": [
                {
                    "title": "Working Document",
                    "views": [
                        { "Id": "v-drafts", "Title": "Drafts" },
                        { "Id": "v-mine", "Title": "My View", "PersonalView": true },
                    ],
                    "items": [
                        { "Id": 1, "Status": "Draft" },
                        { "Id": 2, "Status": "Approved" },
                    ],
                },
                {
                    "title": "Published Documents",
                    "views": [{ "Id": "v-pub", "Title": "Published" }],
                    "items": [{ "Id": 10 }],
                },
            ],
        });
        let service = Arc::new(FixtureHost::from_json(&fixture.to_string()).unwrap());
        Dashboard::new(service, Config::new(SITE, "Working Document"))
    }

    #[tokio::test]
    async fn test_reload_commits_catalog() {
        let dashboard = dashboard();
        assert!(dashboard.catalog().is_empty());

        let catalog = dashboard.reload().await.unwrap();
        assert_eq!(catalog.entries[0].id, WORKING_DOCUMENT_TILE);
        assert_eq!(dashboard.catalog().entries.len(), catalog.entries.len());
    }

    #[tokio::test]
    async fn test_toggle_expands_and_collapses() {
        let dashboard = dashboard();
        dashboard.reload().await.unwrap();

        let outcome = dashboard.toggle_tile(WORKING_DOCUMENT_TILE).await;
        assert_eq!(outcome, TileToggle::Expanded);
        assert!(dashboard.is_tile_expanded(WORKING_DOCUMENT_TILE));

        // Personal views stay out of nested sequences too.
        let nested = dashboard.tile_views(WORKING_DOCUMENT_TILE);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].title, "Drafts");

        let outcome = dashboard.toggle_tile(WORKING_DOCUMENT_TILE).await;
        assert_eq!(outcome, TileToggle::Collapsed);
        assert!(!dashboard.is_tile_expanded(WORKING_DOCUMENT_TILE));
    }

    #[tokio::test]
    async fn test_published_tile_fetches_secondary_library() {
        let dashboard = dashboard();
        dashboard.reload().await.unwrap();

        let outcome = dashboard.toggle_tile(PUBLISHED_DOCUMENTS_TILE).await;
        assert_eq!(outcome, TileToggle::Expanded);
        let nested = dashboard.tile_views(PUBLISHED_DOCUMENTS_TILE);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].title, "Published");
    }

    #[tokio::test]
    async fn test_non_summary_toggle_is_ignored() {
        let dashboard = dashboard();
        dashboard.reload().await.unwrap();
        assert_eq!(dashboard.toggle_tile("v-drafts").await, TileToggle::Ignored);
    }

    #[tokio::test]
    async fn test_reconfigure_to_blank_list_empties_catalog() {
        let dashboard = dashboard();
        dashboard.reload().await.unwrap();
        assert!(!dashboard.catalog().is_empty());

        let catalog = dashboard
            .reconfigure(Config::new(SITE, ""))
            .await
            .unwrap();
        assert!(catalog.is_empty());
        assert!(dashboard.catalog().is_empty());
    }
}
