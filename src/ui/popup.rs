/// Popup UI for the page checklist extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use patternfly_yew::prelude::*;
use crate::bridge::browser_popup;
use crate::checklist::LoadOutcome;
use crate::config::PopupConfig;
use crate::toggle::toggle_subheading;

#[derive(Properties, PartialEq, Default)]
pub struct PopupProps {
    #[prop_or_default]
    pub config: PopupConfig,
}

#[function_component(App)]
pub fn app(props: &PopupProps) -> Html {
    let root_ref = use_node_ref();

    // Load the saved checklist once, on mount
    {
        let root_ref = root_ref.clone();
        let config = props.config.clone();

        use_effect_with((), move |_| {
            match root_ref.cast::<Element>() {
                Some(root) => spawn_local(async move {
                    match browser_popup(config).initial_load(&root).await {
                        Ok(LoadOutcome::Rendered { url }) => log::debug!("checklist loaded for {}", url),
                        Ok(LoadOutcome::Skipped) => {}
                        Err(e) => log::error!("Failed to load checklist: {}", e),
                    }
                }),
                None => log::error!("checklist root not mounted"),
            }
            || ()
        });
    }

    // Subheadings are rendered by the loader, so clicks are delegated from the root
    let on_root_click = {
        let selector = props.config.subheading_selector.clone();

        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            match target.closest(&selector) {
                Ok(Some(header)) => {
                    if let Err(err) = toggle_subheading(&header) {
                        log::error!("Toggle failed: {}", err);
                    }
                }
                Ok(None) => {}
                Err(err) => log::warn!("Bad subheading selector {:?}: {:?}", selector, err),
            }
        })
    };

    // Fire-and-forget save
    let on_save = {
        let root_ref = root_ref.clone();
        let config = props.config.clone();

        Callback::from(move |_| {
            let Some(root) = root_ref.cast::<Element>() else {
                log::error!("checklist root not mounted");
                return;
            };
            let config = config.clone();

            spawn_local(async move {
                if let Err(e) = browser_popup(config).save(&root).await {
                    log::error!("Failed to save checklist: {}", e);
                }
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Page Checklist"}</h1>

            <div
                id={props.config.checklist_root_id.clone()}
                class="checklist"
                ref={root_ref}
                onclick={on_root_click}
            ></div>

            <div class="flex-column-gap">
                <Button onclick={on_save} variant={ButtonVariant::Primary} block={true}>
                    {"Save"}
                </Button>
            </div>
        </div>
    }
}
