/// Page Checklist - Chrome Extension keeping a checklist per page
/// Built with Rust + WASM + Yew

mod bridge;
pub mod checklist;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod host;
pub mod tab_data;
pub mod toggle;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::PopupConfig;
use crate::error::ChecklistError;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Same, with settings from the hosting page; missing fields keep their defaults
#[wasm_bindgen]
pub fn start_popup_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: PopupConfig = if config.is_undefined() || config.is_null() {
        PopupConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(ChecklistError::from)?
    };

    yew::Renderer::<ui::popup::App>::with_props(ui::popup::PopupProps { config }).render();
    Ok(())
}

// Click handler for subheadings wired outside the Yew shell
#[wasm_bindgen]
pub fn toggle_subheading(event: web_sys::Event) -> Result<(), JsValue> {
    let header = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .ok_or_else(|| ChecklistError::Dom("event target is not an element".to_string()))?;

    toggle::toggle_subheading(&header)?;
    Ok(())
}

// Save handler for triggers wired outside the Yew shell
#[wasm_bindgen]
pub async fn save_checklist() -> Result<(), JsValue> {
    let config = PopupConfig::default();
    let root = bridge::checklist_root(&config.checklist_root_id)?;

    if let Err(e) = bridge::browser_popup(config).save(&root).await {
        log::error!("Failed to save checklist: {}", e);
        return Err(e.into());
    }
    Ok(())
}
