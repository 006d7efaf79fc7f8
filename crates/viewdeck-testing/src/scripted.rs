//! List service with per-operation failure injection.
//!
//! Wraps a [`FixtureHost`] and lets a test break individual service
//! operations to drive the count ladders down their fallback rungs. A
//! call log records which operations ran, so tests can assert that a
//! ladder short-circuited where it should.

use std::collections::BTreeSet;
use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::Value;
use viewdeck_providers::{FixtureHost, ItemQuery, ListHandle, ListService};
use viewdeck_types::{ListRecord, RawView, ViewDetail};

/// One service operation, for failure injection and call logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Op {
    GetList,
    GetViews,
    GetViewDetail,
    QueryItems,
    FilteredQuery,
    RenderViewData,
    GetCurrentUserId,
    GetListItemCount,
}

/// Fixture-backed service whose operations can be made to fail.
pub struct ScriptedService {
    host: FixtureHost,
    failing: Mutex<BTreeSet<Op>>,
    calls: Mutex<Vec<Op>>,
}

impl ScriptedService {
    pub fn new(host: FixtureHost) -> Self {
        Self {
            host,
            failing: Mutex::new(BTreeSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes an operation fail from now on.
    pub fn break_op(&self, op: Op) {
        self.lock_failing().insert(op);
    }

    /// Restores a broken operation.
    pub fn restore_op(&self, op: Op) {
        self.lock_failing().remove(&op);
    }

    /// Operations invoked so far, in order.
    pub fn calls(&self) -> Vec<Op> {
        self.lock_calls().clone()
    }

    pub fn call_count(&self, op: Op) -> usize {
        self.lock_calls().iter().filter(|c| **c == op).count()
    }

    fn check(&self, op: Op) -> Result<()> {
        self.lock_calls().push(op);
        if self.lock_failing().contains(&op) {
            bail!("scripted failure: {:?}", op);
        }
        Ok(())
    }

    fn lock_failing(&self) -> std::sync::MutexGuard<'_, BTreeSet<Op>> {
        self.failing.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<Op>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ListService for ScriptedService {
    async fn get_list(&self, site_url: &str, list_title: &str) -> Result<Option<ListHandle>> {
        self.check(Op::GetList)?;
        self.host.get_list(site_url, list_title).await
    }

    async fn get_views(&self, site_url: &str, list_title: &str) -> Result<Vec<RawView>> {
        self.check(Op::GetViews)?;
        self.host.get_views(site_url, list_title).await
    }

    async fn get_view_detail(
        &self,
        site_url: &str,
        list_title: &str,
        view_id: &str,
    ) -> Result<ViewDetail> {
        self.check(Op::GetViewDetail)?;
        self.host.get_view_detail(site_url, list_title, view_id).await
    }

    async fn query_items(
        &self,
        site_url: &str,
        list_title: &str,
        query: &ItemQuery,
    ) -> Result<Vec<ListRecord>> {
        // Filtered and unfiltered queries are distinct rungs of the count
        // ladders, so they are breakable independently.
        let op = if query.filter.is_some() {
            Op::FilteredQuery
        } else {
            Op::QueryItems
        };
        self.check(op)?;
        self.host.query_items(site_url, list_title, query).await
    }

    async fn render_view_data(
        &self,
        site_url: &str,
        list_title: &str,
        stored_query: &str,
        view_id: &str,
    ) -> Result<Value> {
        self.check(Op::RenderViewData)?;
        self.host
            .render_view_data(site_url, list_title, stored_query, view_id)
            .await
    }

    async fn get_current_user_id(&self, site_url: &str) -> Result<String> {
        self.check(Op::GetCurrentUserId)?;
        self.host.get_current_user_id(site_url).await
    }

    async fn get_list_item_count(&self, site_url: &str, list_title: &str) -> Result<usize> {
        self.check(Op::GetListItemCount)?;
        self.host.get_list_item_count(site_url, list_title).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureBuilder, ListFixture};

    fn service() -> ScriptedService {
        let host = FixtureBuilder::new("")
            .list(ListFixture::new("Docs").status_items("Status", &["Draft", "Approved"]))
            .into_host()
            .unwrap();
        ScriptedService::new(host)
    }

    #[tokio::test]
    async fn test_broken_op_fails_and_logs() {
        let service = service();
        service.break_op(Op::GetViews);

        assert!(service.get_views("", "Docs").await.is_err());
        assert_eq!(service.calls(), vec![Op::GetViews]);

        service.restore_op(Op::GetViews);
        assert!(service.get_views("", "Docs").await.is_ok());
    }

    #[tokio::test]
    async fn test_filtered_queries_break_independently() {
        let service = service();
        service.break_op(Op::FilteredQuery);

        let filtered = ItemQuery::field_equals("Status", "Draft");
        assert!(service.query_items("", "Docs", &filtered).await.is_err());
        assert!(service.query_items("", "Docs", &ItemQuery::all()).await.is_ok());
    }
}
