/// Checklist popup controller: initial load and save-on-demand

use crate::collaborators::{ChecklistLoader, ChecklistStorage};
use crate::config::PopupConfig;
use crate::error::ChecklistError;
use crate::host::{HostRuntime, active_tab_url, environment_guard};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Host capabilities absent; nothing was queried.
    Skipped,
    /// The snapshot saved for `url` was handed to the loader.
    Rendered { url: String },
}

/// Stateless relay between DOM events, the host runtime and the two collaborators.
pub struct ChecklistPopup<H, S, L> {
    host: H,
    storage: S,
    loader: L,
    config: PopupConfig,
}

impl<H, S, L> ChecklistPopup<H, S, L>
where
    H: HostRuntime,
    S: ChecklistStorage,
    L: ChecklistLoader,
{
    pub fn new(host: H, storage: S, loader: L) -> Self {
        ChecklistPopup {
            host,
            storage,
            loader,
            config: PopupConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PopupConfig) -> Self {
        self.config = config;
        self
    }

    pub fn is_host_available(&self) -> bool {
        environment_guard(&self.host)
    }

    /// Fetch the snapshot saved for the active tab and render it into `root`.
    ///
    /// Inert when the environment guard fails: no tab query, no collaborator call.
    pub async fn initial_load(&self, root: &L::Root) -> Result<LoadOutcome, ChecklistError> {
        if !self.is_host_available() {
            log::info!("host runtime unavailable, skipping checklist load");
            return Ok(LoadOutcome::Skipped);
        }

        let url = active_tab_url(&self.host).await?;
        let data = self.storage.load_checklist_for_url(&url).await?;
        self.loader.load_checklist_from_json(&data, root)?;

        Ok(LoadOutcome::Rendered { url })
    }

    /// Serialize `root` and store it under the active tab's URL.
    ///
    /// Returns the URL the snapshot was saved under.
    pub async fn save(&self, root: &L::Root) -> Result<String, ChecklistError> {
        if self.config.guard_save && !self.is_host_available() {
            return Err(ChecklistError::HostUnavailable);
        }

        let snapshot = self.loader.render_json_from_html(root)?;
        let url = active_tab_url(&self.host).await?;
        self.storage.save_checklist(&snapshot, &url).await?;

        log::debug!("checklist saved for {}", url);
        Ok(url)
    }
}
