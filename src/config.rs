/// Popup configuration, optionally supplied by the hosting page
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOT_ID: &str = "checklist";
pub const DEFAULT_SUBHEADING_SELECTOR: &str = ".subheading";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupConfig {
    /// Id of the element the loader renders the checklist into.
    pub checklist_root_id: String,
    /// CSS selector matching subheading headers inside the root.
    pub subheading_selector: String,
    /// Refuse to save when the environment guard fails.
    pub guard_save: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            checklist_root_id: DEFAULT_ROOT_ID.to_string(),
            subheading_selector: DEFAULT_SUBHEADING_SELECTOR.to_string(),
            guard_save: true,
        }
    }
}
