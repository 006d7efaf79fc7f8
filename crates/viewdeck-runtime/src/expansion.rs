//! Per-tile expansion lifecycle.
//!
//! Summary tiles expand lazily: the first toggle starts an independent
//! nested fetch, a second toggle collapses. In-flight fetches are never
//! cancelled; each one carries a generation ticket and a result whose
//! ticket has been superseded is dropped on arrival.

use std::collections::{BTreeMap, BTreeSet};

use viewdeck_types::{ViewDescriptor, is_summary_tile};

/// What a toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The tile was expanded or loading and is now collapsed.
    Collapsed,
    /// The tile is now loading; the caller must run the nested fetch and
    /// hand its result back through [`ExpansionState::complete`].
    ExpandRequested(FetchTicket),
    /// Not a summary tile; expansion does not apply.
    Ignored,
}

/// Ticket identifying one nested fetch. Completion is accepted only while
/// the ticket is still the tile's current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub tile_id: String,
    generation: u64,
}

/// Expansion and nested-view state for all tiles.
///
/// Owned by a single component; transitions are applied synchronously and
/// nested sequences are replaced wholesale, never merged.
#[derive(Debug, Default)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
    loading: BTreeSet<String>,
    nested: BTreeMap<String, Vec<ViewDescriptor>>,
    tickets: BTreeMap<String, u64>,
    next_generation: u64,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one user toggle to a tile.
    pub fn toggle(&mut self, tile_id: &str) -> ToggleOutcome {
        if !is_summary_tile(tile_id) {
            return ToggleOutcome::Ignored;
        }

        let was_expanded = self.expanded.remove(tile_id);
        let was_loading = self.loading.remove(tile_id);
        if was_expanded || was_loading {
            // Collapsing invalidates the tile's current ticket so a fetch
            // still in flight lands stale.
            self.issue_ticket(tile_id);
            return ToggleOutcome::Collapsed;
        }

        let generation = self.issue_ticket(tile_id);
        self.loading.insert(tile_id.to_string());
        ToggleOutcome::ExpandRequested(FetchTicket {
            tile_id: tile_id.to_string(),
            generation,
        })
    }

    /// Delivers a nested fetch result. Returns false when the ticket was
    /// superseded by a collapse or a newer expansion; the result is then
    /// discarded and no state changes.
    pub fn complete(&mut self, ticket: &FetchTicket, views: Vec<ViewDescriptor>) -> bool {
        if self.tickets.get(&ticket.tile_id) != Some(&ticket.generation)
            || !self.loading.contains(&ticket.tile_id)
        {
            return false;
        }
        self.loading.remove(&ticket.tile_id);
        self.expanded.insert(ticket.tile_id.clone());
        self.nested.insert(ticket.tile_id.clone(), views);
        true
    }

    pub fn is_expanded(&self, tile_id: &str) -> bool {
        self.expanded.contains(tile_id)
    }

    pub fn is_loading(&self, tile_id: &str) -> bool {
        self.loading.contains(tile_id)
    }

    /// Nested views from the tile's most recent completed fetch.
    pub fn nested_views(&self, tile_id: &str) -> &[ViewDescriptor] {
        self.nested.get(tile_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn issue_ticket(&mut self, tile_id: &str) -> u64 {
        self.next_generation += 1;
        self.tickets.insert(tile_id.to_string(), self.next_generation);
        self.next_generation
    }
}
