use dioxus::prelude::*;

use store::{PlantId, SiteConfig};
use ui::{use_garden, ClientList, NewClientForm, Popup};

#[component]
pub fn Clients() -> Element {
    let config = use_context::<SiteConfig>();
    let mut garden = use_garden();
    let mut error = use_signal(|| Option::<String>::None);

    let plants: Vec<_> = garden.read().plants().cloned().collect();

    let handle_create = move |(name, plant_ids): (String, Vec<PlantId>)| {
        let result = garden.write().add_client(&name, &plant_ids);
        match result {
            Ok(id) => {
                tracing::info!("Added client {} ({})", name, id);
                error.set(None);
            }
            Err(e) => {
                tracing::warn!("Failed to add client {}: {}", name, e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        h1 { "Clients" }
        ClientList {}

        Popup {
            config: config.popup.clone(),
            trigger_label: "Add client",
            NewClientForm { plants, on_create: handle_create }
            if let Some(msg) = error() {
                p { class: "client-form-error", "{msg}" }
            }
        }
    }
}
