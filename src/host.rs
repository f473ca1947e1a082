/// Host runtime seam: tab querying and capability probes
use crate::error::ChecklistError;
use crate::tab_data::{TabInfo, TabQuery, first_tab_url};

/// The browser-extension runtime as seen by the popup.
#[allow(async_fn_in_trait)]
pub trait HostRuntime {
    /// Whether the tab-querying capability is present.
    fn has_tabs(&self) -> bool;

    /// Whether the storage capability is present.
    fn has_storage(&self) -> bool;

    /// Single-shot tab query; resolves once with the matching tabs.
    async fn query_tabs(&self, query: &TabQuery) -> Result<Vec<TabInfo>, ChecklistError>;
}

/// True only when both the tabs and storage capabilities are present.
pub fn environment_guard<H: HostRuntime + ?Sized>(host: &H) -> bool {
    host.has_tabs() && host.has_storage()
}

/// Read the active tab's URL fresh from the host.
pub async fn active_tab_url<H: HostRuntime + ?Sized>(host: &H) -> Result<String, ChecklistError> {
    let tabs = host.query_tabs(&TabQuery::active_in_current_window()).await?;
    let url = first_tab_url(&tabs)?;
    log::debug!("active tab: {}", url);
    Ok(url)
}
