//! Programmatic construction of fixture files.
//!
//! Tests describe a site's lists, views, and records fluently and either
//! materialize the fixture as JSON on disk (for CLI runs) or load it
//! straight into a [`FixtureHost`].

use std::path::Path;

use anyhow::Result;
use serde_json::{Value, json};
use viewdeck_providers::FixtureHost;

/// Builder for one fixture site.
#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    site_url: String,
    current_user_id: String,
    nested_render: bool,
    lists: Vec<ListFixture>,
}

impl FixtureBuilder {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            current_user_id: "1".to_string(),
            nested_render: false,
            lists: Vec::new(),
        }
    }

    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.current_user_id = user_id.into();
        self
    }

    /// Answer render calls in the `{"ListData": {"Row": [...]}}` shape.
    pub fn nested_render(mut self) -> Self {
        self.nested_render = true;
        self
    }

    pub fn list(mut self, list: ListFixture) -> Self {
        self.lists.push(list);
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "site_url": self.site_url,
            "current_user_id": self.current_user_id,
            "render_shape": if self.nested_render { "nested" } else { "flat" },
            "lists": self.lists.iter().map(ListFixture::to_json).collect::<Vec<_>>(),
        })
    }

    /// Write the fixture to disk for a CLI run.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(&self.to_json())?)?;
        Ok(())
    }

    /// Load the fixture directly as an in-process service.
    pub fn into_host(self) -> Result<FixtureHost> {
        FixtureHost::from_json(&self.to_json().to_string())
    }
}

/// Builder for one list inside a fixture.
#[derive(Debug, Clone)]
pub struct ListFixture {
    title: String,
    fields: Vec<String>,
    item_count: Option<usize>,
    views: Vec<Value>,
    items: Vec<Value>,
}

impl ListFixture {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            item_count: None,
            views: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Restrict which columns the list carries; filters on any other
    /// column are rejected the way the live service rejects them.
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Coarse item count the service reports for the list itself.
    pub fn reported_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    pub fn view(mut self, id: &str, title: &str) -> Self {
        self.views.push(json!({ "Id": id, "Title": title }));
        self
    }

    pub fn view_with_query(mut self, id: &str, title: &str, field: &str, value: &str) -> Self {
        let query = format!(
            "<Where><Eq><FieldRef Name=\"{}\"/><Value Type=\"Text\">{}</Value></Eq></Where>",
            field, value
        );
        self.views
            .push(json!({ "Id": id, "Title": title, "ViewQuery": query }));
        self
    }

    pub fn personal_view(mut self, id: &str, title: &str) -> Self {
        self.views
            .push(json!({ "Id": id, "Title": title, "PersonalView": true }));
        self
    }

    pub fn raw_view(mut self, view: Value) -> Self {
        self.views.push(view);
        self
    }

    pub fn item(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    /// One record per status literal, stored under `field`.
    pub fn status_items(mut self, field: &str, statuses: &[&str]) -> Self {
        let base = self.items.len();
        for (i, status) in statuses.iter().enumerate() {
            self.items.push(json!({
                "Id": base + i + 1,
                "Title": format!("doc-{}", base + i + 1),
                field: status,
            }));
        }
        self
    }

    fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "fields": self.fields,
            "item_count": self.item_count,
            "views": self.views,
            "items": self.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_loadable_fixture() {
        let host = FixtureBuilder::new("https://tenant.example.com/sites/docs")
            .user("7")
            .list(
                ListFixture::new("Working Document")
                    .view("v1", "Drafts")
                    .status_items("Status", &["Draft", "Approved"]),
            )
            .into_host();
        assert!(host.is_ok());
    }

    #[test]
    fn test_fixture_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        FixtureBuilder::new("https://tenant.example.com")
            .list(ListFixture::new("Docs"))
            .write_to(&path)
            .unwrap();
        assert!(path.exists());
    }
}
