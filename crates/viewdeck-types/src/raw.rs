use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One view definition as returned by the list host's view collection call.
///
/// Field names follow the wire shape of the hosting service; every field is
/// optional on the wire, so defaults mirror what the service omits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawView {
    #[serde(rename = "Id", default)]
    pub id: String,

    #[serde(rename = "Title", default)]
    pub title: Option<String>,

    #[serde(rename = "Url", default)]
    pub url: Option<String>,

    #[serde(rename = "ServerRelativeUrl", default)]
    pub server_relative_url: Option<String>,

    #[serde(rename = "DefaultView", default)]
    pub is_default: bool,

    #[serde(rename = "ViewType", default)]
    pub view_type: Option<String>,

    #[serde(rename = "Hidden", default)]
    pub is_hidden: bool,
}

impl RawView {
    /// Display title, defaulting the way the service's own UI does.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled View",
        }
    }

    /// Render hint, defaulting to the tabular kind.
    pub fn render_kind(&self) -> &str {
        match self.view_type.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => "HTML",
        }
    }
}

/// Per-view detail fetched separately from the view collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewDetail {
    /// The view's stored query, verbatim. Empty when the view has none.
    #[serde(rename = "ViewQuery", default)]
    pub stored_query: String,

    #[serde(rename = "PersonalView", default)]
    pub is_personal: bool,

    #[serde(rename = "DefaultView", default)]
    pub is_default: bool,
}

/// One record mapping returned by an item query.
///
/// The service reports records as loose field maps; which columns are
/// present depends on the select clause and the list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListRecord {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ListRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field, if present and textual.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_view_defaults() {
        let view: RawView = serde_json::from_str(r#"{"Id": "v1"}"#).unwrap();
        assert_eq!(view.display_title(), "Untitled View");
        assert_eq!(view.render_kind(), "HTML");
        assert!(!view.is_default);
        assert!(!view.is_hidden);
    }

    #[test]
    fn test_raw_view_wire_names() {
        let view: RawView = serde_json::from_str(
            r#"{"Id": "v2", "Title": "Drafts", "ServerRelativeUrl": "/lib/drafts.aspx", "DefaultView": true}"#,
        )
        .unwrap();
        assert_eq!(view.display_title(), "Drafts");
        assert_eq!(view.server_relative_url.as_deref(), Some("/lib/drafts.aspx"));
        assert!(view.is_default);
    }

    #[test]
    fn test_record_text_field() {
        let mut record = ListRecord::new();
        record.set("Status", "Pending");
        record.set("Id", 3);
        assert_eq!(record.text("Status"), Some("Pending"));
        assert_eq!(record.text("Id"), None);
        assert!(record.has_field("Id"));
        assert!(!record.has_field("Missing"));
    }
}
