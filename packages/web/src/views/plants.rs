use dioxus::prelude::*;

use store::SiteConfig;
use ui::{MaintenanceCalendar, PlantTable, Popup};

#[component]
pub fn Plants() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        h1 { "Plants" }
        PlantTable {}

        Popup {
            config: config.popup.clone(),
            trigger_label: "Maintenance calendar",
            h2 { "Maintenance calendar" }
            MaintenanceCalendar {}
        }
    }
}
