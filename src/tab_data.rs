/// Tab descriptors and the active-tab query filter
use serde::{Deserialize, Serialize};

use crate::error::ChecklistError;

/// Information about a browser tab, as reported by `chrome.tabs.query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabInfo {
    pub id: Option<i32>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub active: bool,
    pub index: i32,
}

impl TabInfo {
    pub fn with_url(url: &str) -> TabInfo {
        TabInfo {
            url: Some(url.to_string()),
            active: true,
            ..TabInfo::default()
        }
    }
}

/// Filter passed to the host tab query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    pub active: bool,
    pub current_window: bool,
}

impl TabQuery {
    /// The focused tab of the focused window.
    pub fn active_in_current_window() -> TabQuery {
        TabQuery {
            active: true,
            current_window: true,
        }
    }
}

/// URL of the first tab in a query result. Neither validated nor normalized.
pub fn first_tab_url(tabs: &[TabInfo]) -> Result<String, ChecklistError> {
    let tab = tabs.first().ok_or(ChecklistError::NoActiveTab)?;
    tab.url.clone().ok_or(ChecklistError::MissingTabUrl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_url() {
        let tabs = vec![
            TabInfo::with_url("http://example.com/a"),
            TabInfo::with_url("http://example.com/b"),
        ];

        assert_eq!(first_tab_url(&tabs), Ok("http://example.com/a".to_string()));
    }

    #[test]
    fn test_first_tab_url_empty() {
        assert_eq!(first_tab_url(&[]), Err(ChecklistError::NoActiveTab));
    }

    #[test]
    fn test_first_tab_url_missing() {
        let tabs = vec![TabInfo::default()];

        assert_eq!(first_tab_url(&tabs), Err(ChecklistError::MissingTabUrl));
    }

    #[test]
    fn test_url_is_not_normalized() {
        let tabs = vec![TabInfo::with_url("HTTP://Example.com/A?x=1#frag")];

        assert_eq!(first_tab_url(&tabs), Ok("HTTP://Example.com/A?x=1#frag".to_string()));
    }

    #[test]
    fn test_query_serialization() {
        let json = serde_json::to_value(TabQuery::active_in_current_window()).unwrap();

        assert_eq!(json, serde_json::json!({"active": true, "currentWindow": true}));
    }

    #[test]
    fn test_tab_deserialization_ignores_extra_fields() {
        let tab: TabInfo = serde_json::from_str(
            r#"{"id": 7, "url": "https://rust-lang.org", "title": "Rust", "active": true, "index": 2, "pinned": false, "windowId": 1}"#,
        )
        .unwrap();

        assert_eq!(tab.id, Some(7));
        assert_eq!(tab.url.as_deref(), Some("https://rust-lang.org"));
        assert_eq!(tab.index, 2);
    }
}
