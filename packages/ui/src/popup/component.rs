use dioxus::prelude::*;
use store::PopupConfig;

use crate::icons::FaXmark;
use crate::Icon;

const POPUP_CSS: Asset = asset!("/assets/styling/popup.css");

/// Class list for the close control: the fixed styling hook plus the
/// configured class the close handler is bound through.
fn close_control_class(config: &PopupConfig) -> String {
    format!("popup-close {}", config.close_class)
}

/// An open button and a hidden overlay holding `children`.
///
/// The element ids and the close class come from `config`. Visibility is
/// never driven by Dioxus state: once mounted in the browser the elements are
/// handed to [`super::PopupToggle`], which owns the click handlers until the
/// component unmounts.
#[component]
pub fn Popup(config: PopupConfig, trigger_label: String, children: Element) -> Element {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let binding = use_hook(|| Rc::new(RefCell::new(None::<super::PopupToggle>)));

        let bound = binding.clone();
        let bind_config = config.clone();
        use_effect(move || {
            if bound.borrow().is_some() {
                return;
            }
            match super::PopupToggle::bind_document(&bind_config) {
                Ok(toggle) => *bound.borrow_mut() = Some(toggle),
                Err(e) => tracing::error!("Popup #{} not bound: {}", bind_config.container_id, e),
            }
        });

        // Dropping the toggle removes its listeners
        use_drop(move || {
            binding.borrow_mut().take();
        });
    }

    rsx! {
        document::Link { rel: "stylesheet", href: POPUP_CSS }

        button {
            id: "{config.trigger_id}",
            class: "popup-trigger",
            r#type: "button",
            "{trigger_label}"
        }
        div {
            id: "{config.container_id}",
            class: "popup",
            style: "display: none",
            div {
                class: "popup-content",
                span {
                    class: close_control_class(&config),
                    title: "Close",
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_control_keeps_styling_hook() {
        let config = PopupConfig {
            close_class: "dismiss".to_string(),
            ..PopupConfig::default()
        };
        assert_eq!(close_control_class(&config), "popup-close dismiss");
        assert_eq!(
            close_control_class(&PopupConfig::default()),
            "popup-close closeBtn"
        );
    }
}
