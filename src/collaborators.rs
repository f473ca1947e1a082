/// Storage and loader collaborators the popup delegates to

use crate::error::ChecklistError;

/// Serialized form of the checklist DOM. Passed through, never inspected.
pub type Snapshot = serde_json::Value;

/// Key-value persistence of checklist snapshots, keyed by page URL.
#[allow(async_fn_in_trait)]
pub trait ChecklistStorage {
    /// Previously saved snapshot for `url`, or `Snapshot::Null` when nothing was saved.
    async fn load_checklist_for_url(&self, url: &str) -> Result<Snapshot, ChecklistError>;

    /// Best-effort write; no retry, no acknowledgement beyond the result.
    async fn save_checklist(&self, snapshot: &Snapshot, url: &str) -> Result<(), ChecklistError>;
}

/// Translation between the checklist DOM subtree and snapshots.
pub trait ChecklistLoader {
    type Root: ?Sized;

    /// Rebuild the subtree under `root` from `data`.
    fn load_checklist_from_json(&self, data: &Snapshot, root: &Self::Root) -> Result<(), ChecklistError>;

    fn render_json_from_html(&self, root: &Self::Root) -> Result<Snapshot, ChecklistError>;
}
