//! Orchestration layer: catalog builds, count resolution, expansion
//! lifecycle, and the dashboard façade that owns their state.
//!
//! The layering mirrors the data flow: `counts` resolves one view,
//! `catalog` fans resolution out across a list and assembles the
//! displayed sequence, `expansion` tracks per-tile lifecycles, and
//! [`Dashboard`] is the single state owner consumers talk to.

pub mod catalog;
pub mod config;
pub mod counts;
pub mod dashboard;
pub mod error;
pub mod expansion;

pub use catalog::{build_catalog, nested_views};
pub use config::Config;
pub use counts::{CountStrategy, extract_rows, library_total, resolve_count, select_strategy};
pub use dashboard::{Dashboard, TileToggle};
pub use error::{Error, Result};
pub use expansion::{ExpansionState, FetchTicket, ToggleOutcome};
