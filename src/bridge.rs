/// Browser bindings: chrome.tabs, the storage global and the loader global

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::checklist::ChecklistPopup;
use crate::collaborators::{ChecklistLoader, ChecklistStorage, Snapshot};
use crate::config::PopupConfig;
use crate::error::ChecklistError;
use crate::host::HostRuntime;
use crate::tab_data::{TabInfo, TabQuery};

// Import JS bridge functions
#[wasm_bindgen(module = "/checklist_host.js")]
extern "C" {
    fn hasTabs() -> bool;

    fn hasStorage() -> bool;

    #[wasm_bindgen(catch)]
    async fn queryTabs(filter: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn loadChecklistForUrl(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn saveChecklist(json: JsValue, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn loadChecklistFromJson(data: JsValue, root: &Element) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn renderJsonFromHtml(root: &Element) -> Result<JsValue, JsValue>;
}

pub type BrowserPopup = ChecklistPopup<ChromeHost, ScriptStorage, ScriptLoader>;

pub fn browser_popup(config: PopupConfig) -> BrowserPopup {
    ChecklistPopup::new(ChromeHost, ScriptStorage, ScriptLoader).with_config(config)
}

/// Find the checklist root in the current document.
pub fn checklist_root(id: &str) -> Result<Element, ChecklistError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| ChecklistError::MissingElement(id.to_string()))
}

pub struct ChromeHost;

impl HostRuntime for ChromeHost {
    fn has_tabs(&self) -> bool {
        hasTabs()
    }

    fn has_storage(&self) -> bool {
        hasStorage()
    }

    async fn query_tabs(&self, query: &TabQuery) -> Result<Vec<TabInfo>, ChecklistError> {
        let filter = serde_wasm_bindgen::to_value(query)?;
        let tabs_js = queryTabs(filter)
            .await
            .map_err(|e| ChecklistError::Host(format!("{:?}", e)))?;
        Ok(serde_wasm_bindgen::from_value(tabs_js)?)
    }
}

pub struct ScriptStorage;

impl ChecklistStorage for ScriptStorage {
    async fn load_checklist_for_url(&self, url: &str) -> Result<Snapshot, ChecklistError> {
        let data_js = loadChecklistForUrl(url)
            .await
            .map_err(|e| ChecklistError::Storage(format!("{:?}", e)))?;
        from_js(data_js)
    }

    async fn save_checklist(&self, snapshot: &Snapshot, url: &str) -> Result<(), ChecklistError> {
        saveChecklist(to_js(snapshot)?, url)
            .await
            .map_err(|e| ChecklistError::Storage(format!("{:?}", e)))
    }
}

pub struct ScriptLoader;

impl ChecklistLoader for ScriptLoader {
    type Root = Element;

    fn load_checklist_from_json(&self, data: &Snapshot, root: &Element) -> Result<(), ChecklistError> {
        loadChecklistFromJson(to_js(data)?, root).map_err(|e| ChecklistError::Loader(format!("{:?}", e)))
    }

    fn render_json_from_html(&self, root: &Element) -> Result<Snapshot, ChecklistError> {
        let json_js = renderJsonFromHtml(root).map_err(|e| ChecklistError::Loader(format!("{:?}", e)))?;
        from_js(json_js)
    }
}

// Plain JS objects rather than Maps, so the collaborators see ordinary JSON.
fn to_js(snapshot: &Snapshot) -> Result<JsValue, ChecklistError> {
    Ok(snapshot.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn from_js(value: JsValue) -> Result<Snapshot, ChecklistError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Snapshot::Null);
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn absent_saved_data_is_null() {
        assert_eq!(from_js(JsValue::UNDEFINED), Ok(Snapshot::Null));
        assert_eq!(from_js(JsValue::NULL), Ok(Snapshot::Null));
    }

    #[wasm_bindgen_test]
    fn snapshot_crosses_as_plain_object() {
        let snapshot = json!({"Setup": ["a"], "Deploy": ["b"], "Cleanup": ["c"]});

        let value = to_js(&snapshot).unwrap();

        assert!(!value.is_instance_of::<js_sys::Map>());
        let keys: Vec<String> = js_sys::Object::keys(value.unchecked_ref())
            .iter()
            .filter_map(|key| key.as_string())
            .collect();
        assert_eq!(keys, vec!["Setup", "Deploy", "Cleanup"]);
    }

    #[wasm_bindgen_test]
    fn snapshot_round_trips_unchanged() {
        let json = r#"{"Setup":["a"],"Deploy":[{"text":"b","done":true}],"Cleanup":[]}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        let back = from_js(to_js(&snapshot).unwrap()).unwrap();

        assert_eq!(back, snapshot);
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }

    #[wasm_bindgen_test]
    fn object_from_javascript_keeps_key_order() {
        let value = js_sys::JSON::parse(r#"{"Setup":["a"],"Deploy":["b"],"Cleanup":["c"]}"#).unwrap();

        let snapshot = from_js(value).unwrap();

        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"Setup":["a"],"Deploy":["b"],"Cleanup":["c"]}"#
        );
    }
}
