//! File-backed list host for local runs and tests.
//!
//! A fixture file describes one site: its lists, each list's views (with
//! stored queries and personal flags), and its records. The host answers
//! the full [`ListService`](crate::ListService) contract from that file,
//! including the service's stricter behaviors: filters on columns a list
//! does not carry are rejected, result sets are truncated at the row cap,
//! and the render endpoint answers in one of the two known shapes.

use crate::traits::{ItemQuery, ListHandle, ListService};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::path::Path;
use viewdeck_types::{ListRecord, RawView, ViewDetail};

/// Shape of the rendering endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderShape {
    /// `{"Row": [...]}`
    #[default]
    Flat,
    /// `{"ListData": {"Row": [...]}}`
    Nested,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FixtureView {
    #[serde(flatten)]
    raw: RawView,

    #[serde(rename = "ViewQuery", default)]
    stored_query: String,

    #[serde(rename = "PersonalView", default)]
    is_personal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FixtureList {
    title: String,

    /// Columns the list carries. Filters on other columns are rejected the
    /// way the live service rejects them. Derived from the records when
    /// omitted.
    #[serde(default)]
    fields: Vec<String>,

    /// Coarse item count the service reports for the list itself. Falls
    /// back to the record count when omitted.
    #[serde(default)]
    item_count: Option<usize>,

    #[serde(default)]
    views: Vec<FixtureView>,

    #[serde(default)]
    items: Vec<ListRecord>,
}

impl FixtureList {
    fn known_fields(&self) -> BTreeSet<&str> {
        if !self.fields.is_empty() {
            return self.fields.iter().map(String::as_str).collect();
        }
        self.items
            .iter()
            .flat_map(|record| record.fields.keys().map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FixtureFile {
    /// Site this fixture serves. Empty accepts any site.
    #[serde(default)]
    site_url: String,

    #[serde(default = "default_user_id")]
    current_user_id: String,

    #[serde(default)]
    render_shape: RenderShape,

    #[serde(default)]
    lists: Vec<FixtureList>,
}

fn default_user_id() -> String {
    "1".to_string()
}

/// In-memory list host loaded from a fixture file.
pub struct FixtureHost {
    fixture: FixtureFile,
}

static FILTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([\w]+)\s+eq\s+'([^']*)'\s*$").expect("filter regex"));

// Matches the single Eq clause of a stored query:
// <Eq><FieldRef Name="Status"/><Value Type="Text">Draft</Value></Eq>
static QUERY_EQ_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<FieldRef\s+Name="([^"]+)"\s*/>\s*<Value[^>]*>([^<]*)</Value>"#)
        .expect("stored query regex")
});

impl FixtureHost {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let fixture: FixtureFile =
            serde_json::from_str(content).context("Failed to parse fixture JSON")?;
        Ok(Self { fixture })
    }

    pub fn site_url(&self) -> &str {
        &self.fixture.site_url
    }

    fn check_site(&self, site_url: &str) -> Result<()> {
        if !self.fixture.site_url.is_empty() && self.fixture.site_url != site_url {
            bail!(
                "Fixture serves '{}', not '{}'",
                self.fixture.site_url,
                site_url
            );
        }
        Ok(())
    }

    fn find_list(&self, list_title: &str) -> Option<&FixtureList> {
        // The live service resolves list titles case-insensitively.
        self.fixture
            .lists
            .iter()
            .find(|list| list.title.eq_ignore_ascii_case(list_title))
    }

    fn require_list(&self, list_title: &str) -> Result<&FixtureList> {
        self.find_list(list_title)
            .with_context(|| format!("List '{}' not in fixture", list_title))
    }

    fn project(record: &ListRecord, select: &[String]) -> ListRecord {
        if select.is_empty() {
            return record.clone();
        }
        let mut projected = ListRecord::new();
        for field in select {
            if let Some(value) = record.fields.get(field) {
                projected.fields.insert(field.clone(), value.clone());
            }
        }
        projected
    }
}

#[async_trait]
impl ListService for FixtureHost {
    async fn get_list(&self, site_url: &str, list_title: &str) -> Result<Option<ListHandle>> {
        self.check_site(site_url)?;
        Ok(self.find_list(list_title).map(|list| ListHandle {
            title: list.title.clone(),
        }))
    }

    async fn get_views(&self, site_url: &str, list_title: &str) -> Result<Vec<RawView>> {
        self.check_site(site_url)?;
        let list = self.require_list(list_title)?;
        Ok(list.views.iter().map(|view| view.raw.clone()).collect())
    }

    async fn get_view_detail(
        &self,
        site_url: &str,
        list_title: &str,
        view_id: &str,
    ) -> Result<ViewDetail> {
        self.check_site(site_url)?;
        let list = self.require_list(list_title)?;
        let view = list
            .views
            .iter()
            .find(|view| view.raw.id == view_id)
            .with_context(|| format!("View '{}' not in list '{}'", view_id, list_title))?;
        Ok(ViewDetail {
            stored_query: view.stored_query.clone(),
            is_personal: view.is_personal,
            is_default: view.raw.is_default,
        })
    }

    async fn query_items(
        &self,
        site_url: &str,
        list_title: &str,
        query: &ItemQuery,
    ) -> Result<Vec<ListRecord>> {
        self.check_site(site_url)?;
        let list = self.require_list(list_title)?;

        let matched: Vec<&ListRecord> = match query.filter.as_deref() {
            None => list.items.iter().collect(),
            Some(expression) => {
                let captures = FILTER_RE
                    .captures(expression)
                    .with_context(|| format!("Unsupported filter expression: {}", expression))?;
                let field = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
                let value = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

                if !list.known_fields().contains(field) {
                    // The live service rejects filters on unknown columns
                    // with a request error rather than an empty result.
                    bail!("Field '{}' does not exist on list '{}'", field, list.title);
                }

                list.items
                    .iter()
                    .filter(|record| record.text(field) == Some(value))
                    .collect()
            }
        };

        Ok(matched
            .into_iter()
            .take(query.row_cap)
            .map(|record| Self::project(record, &query.select))
            .collect())
    }

    async fn render_view_data(
        &self,
        site_url: &str,
        list_title: &str,
        stored_query: &str,
        _view_id: &str,
    ) -> Result<Value> {
        self.check_site(site_url)?;
        let list = self.require_list(list_title)?;

        let rows: Vec<&ListRecord> = if stored_query.trim().is_empty() {
            list.items.iter().collect()
        } else if let Some(captures) = QUERY_EQ_RE.captures(stored_query) {
            let field = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let value = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
            if !list.known_fields().contains(field) {
                bail!("Field '{}' does not exist on list '{}'", field, list.title);
            }
            list.items
                .iter()
                .filter(|record| record.text(field) == Some(value))
                .collect()
        } else {
            // Queries the mini-matcher cannot interpret render unfiltered,
            // which is how the live endpoint treats malformed ViewXml.
            list.items.iter().collect()
        };

        let rows = serde_json::to_value(rows)?;
        Ok(match self.fixture.render_shape {
            RenderShape::Flat => json!({ "Row": rows }),
            RenderShape::Nested => json!({ "ListData": { "Row": rows } }),
        })
    }

    async fn get_current_user_id(&self, site_url: &str) -> Result<String> {
        self.check_site(site_url)?;
        Ok(self.fixture.current_user_id.clone())
    }

    async fn get_list_item_count(&self, site_url: &str, list_title: &str) -> Result<usize> {
        self.check_site(site_url)?;
        let list = self.require_list(list_title)?;
        Ok(list.item_count.unwrap_or(list.items.len()))
    }
}
