/// Error types for the checklist popup
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChecklistError {
    /// The host runtime is missing its tabs or storage capability.
    #[error("host runtime unavailable: tabs or storage capability missing")]
    HostUnavailable,

    /// The active-tab query came back empty.
    #[error("no active tab in the current window")]
    NoActiveTab,

    /// The active tab carries no URL (missing "tabs" permission or a special page).
    #[error("active tab has no URL")]
    MissingTabUrl,

    #[error("tab query failed: {0}")]
    Host(String),

    #[error("storage failed: {0}")]
    Storage(String),

    #[error("loader failed: {0}")]
    Loader(String),

    #[error("element not found: #{0}")]
    MissingElement(String),

    /// A subheading has no next element sibling to show or hide.
    #[error("subheading has no section body")]
    MissingSibling,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_wasm_bindgen::Error> for ChecklistError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ChecklistError::Serialization(e.to_string())
    }
}

impl From<ChecklistError> for JsValue {
    fn from(e: ChecklistError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
