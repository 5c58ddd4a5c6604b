use dioxus::prelude::*;

use store::SiteConfig;
use ui::Popup;

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        h1 { "{config.site.title}" }
        p {
            "Year-round care for private gardens: pruning, feeding and mulching, "
            "scheduled around what grows in yours."
        }

        Popup {
            config: config.popup.clone(),
            trigger_label: "Contact us",
            h2 { "Contact" }
            p { "Call us on weekdays between 8:00 and 17:00, or leave a note in the shed." }
        }
    }
}
