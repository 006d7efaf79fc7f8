use crate::raw::RawView;
use serde::{Deserialize, Serialize};

/// Closed set of status colors a classified view can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Black,
    Blue,
    Orange,
    Red,
    Aliceblue,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Black => "black",
            StatusColor::Blue => "blue",
            StatusColor::Orange => "orange",
            StatusColor::Red => "red",
            StatusColor::Aliceblue => "aliceblue",
        }
    }
}

impl std::str::FromStr for StatusColor {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(StatusColor::Black),
            "blue" => Ok(StatusColor::Blue),
            "orange" => Ok(StatusColor::Orange),
            "red" => Ok(StatusColor::Red),
            "aliceblue" => Ok(StatusColor::Aliceblue),
            other => Err(crate::Error::Malformed(format!(
                "unknown status color: {}",
                other
            ))),
        }
    }
}

/// Classification output attached to a descriptor after the rule table ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Semantic status label. Either a fixed category name or the view's
    /// own title when no rule renames it.
    pub status: String,
    pub status_color: StatusColor,
    pub icon_name: String,
    pub show_view_more: bool,
}

/// One row in the catalog: a view annotated with its resolved count and,
/// once classified, its semantic status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub server_relative_url: Option<String>,
    pub is_default: bool,
    /// Render hint from the service, carried through unmodified.
    pub view_type: String,
    pub is_hidden: bool,
    pub item_count: usize,
    pub is_personal: bool,
    #[serde(flatten)]
    pub classification: Option<Classification>,
}

impl ViewDescriptor {
    /// Descriptor for a raw view before counting and classification.
    pub fn from_raw(raw: &RawView) -> Self {
        Self {
            id: raw.id.clone(),
            title: raw.display_title().to_string(),
            url: raw.url.clone(),
            server_relative_url: raw.server_relative_url.clone(),
            is_default: raw.is_default,
            view_type: raw.render_kind().to_string(),
            is_hidden: raw.is_hidden,
            item_count: 0,
            is_personal: false,
            classification: None,
        }
    }

    /// Synthetic summary-tile descriptor. Summary tiles are not backed by a
    /// real view and carry no navigation url.
    pub fn summary_tile(id: &str, title: &str, item_count: usize, classification: Classification) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url: None,
            server_relative_url: None,
            is_default: false,
            view_type: "HTML".to_string(),
            is_hidden: false,
            item_count,
            is_personal: false,
            classification: Some(classification),
        }
    }

    /// Fallback descriptor emitted when processing one view failed
    /// unexpectedly: original id and title preserved, count zeroed.
    pub fn fallback(raw: &RawView) -> Self {
        Self::from_raw(raw)
    }

    /// Status label to display: the classified status when present,
    /// otherwise the view title.
    pub fn status_label(&self) -> &str {
        self.classification
            .as_ref()
            .map(|c| c.status.as_str())
            .unwrap_or(&self.title)
    }
}
