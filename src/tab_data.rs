/// Data structures for Tab Lister
use serde::{Deserialize, Serialize};

/// Snapshot of a browser tab as returned by `tabs.query`
///
/// Only `title` is rendered. The host leaves `title` undefined when the
/// extension lacks the `tabs` permission, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub index: Option<i32>,
}

impl TabInfo {
    pub fn with_title(title: &str) -> TabInfo {
        TabInfo {
            title: title.to_string(),
            ..TabInfo::default()
        }
    }
}

/// Filter object handed to `tabs.query`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    pub current_window: bool,
}

impl Default for QueryFilter {
    fn default() -> Self {
        QueryFilter {
            current_window: true,
        }
    }
}
