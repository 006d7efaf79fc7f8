use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use viewdeck_types::{ListRecord, RawView, ROW_CAP, ViewDetail};

/// Read access to a list-hosting service.
///
/// This is the only external dependency of the engine. Authentication,
/// transport, timeouts, and permission trimming all live behind it; any
/// failure it reports is treated uniformly as "this step failed" by the
/// count resolution ladders.
///
/// All calls are read-only. Returned records are assumed to be already
/// access-filtered by the service for the calling user.
#[async_trait]
pub trait ListService: Send + Sync {
    /// Look up a list by display title. `Ok(None)` means the list does not
    /// exist; `Err` is a transport failure.
    async fn get_list(&self, site_url: &str, list_title: &str) -> Result<Option<ListHandle>>;

    /// All view definitions of a list.
    async fn get_views(&self, site_url: &str, list_title: &str) -> Result<Vec<RawView>>;

    /// Stored query and personal/default flags for one view.
    async fn get_view_detail(
        &self,
        site_url: &str,
        list_title: &str,
        view_id: &str,
    ) -> Result<ViewDetail>;

    /// Records of a list, optionally filtered server-side. The service may
    /// reject filters on fields the list does not carry.
    async fn query_items(
        &self,
        site_url: &str,
        list_title: &str,
        query: &ItemQuery,
    ) -> Result<Vec<ListRecord>>;

    /// Execute a view's stored query against the list's rendering endpoint.
    ///
    /// The response shape is service-specific: the row collection appears
    /// either at the top level under `Row` or nested under `ListData.Row`.
    /// Callers must accept both.
    async fn render_view_data(
        &self,
        site_url: &str,
        list_title: &str,
        stored_query: &str,
        view_id: &str,
    ) -> Result<Value>;

    /// Identity of the calling user.
    async fn get_current_user_id(&self, site_url: &str) -> Result<String>;

    /// The service's own coarse item count for a list; ignores filters.
    async fn get_list_item_count(&self, site_url: &str, list_title: &str) -> Result<usize>;
}

/// Handle returned by a successful list lookup.
#[derive(Debug, Clone)]
pub struct ListHandle {
    pub title: String,
}

/// One item query: optional filter expression, optional projection, and a
/// row cap the service truncates at.
#[derive(Debug, Clone)]
pub struct ItemQuery {
    /// Filter of the form `Field eq 'Value'`, or None for all records.
    pub filter: Option<String>,
    /// Fields to select; empty means all fields.
    pub select: Vec<String>,
    pub row_cap: usize,
}

impl ItemQuery {
    /// Unfiltered query at the standard row cap.
    pub fn all() -> Self {
        Self {
            filter: None,
            select: Vec::new(),
            row_cap: ROW_CAP,
        }
    }

    /// Equality filter on one field at the standard row cap.
    pub fn field_equals(field: &str, value: &str) -> Self {
        Self {
            filter: Some(format!("{} eq '{}'", field, value)),
            select: Vec::new(),
            row_cap: ROW_CAP,
        }
    }

    pub fn with_select(mut self, fields: &[&str]) -> Self {
        self.select = fields.iter().map(|f| f.to_string()).collect();
        self
    }
}
