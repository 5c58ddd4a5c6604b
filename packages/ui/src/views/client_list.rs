use dioxus::prelude::*;

use crate::garden::use_garden;

#[component]
pub fn ClientList() -> Element {
    let garden = use_garden();
    let store = garden.read();

    let clients: Vec<_> = store
        .clients()
        .map(|client| {
            let plants = store
                .plants_of_client(client.id)
                .unwrap_or_default()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            (client.id.0, client.name.clone(), plants)
        })
        .collect();

    if clients.is_empty() {
        return rsx! {
            p { "No clients yet." }
        };
    }

    rsx! {
        table {
            class: "garden-table",
            thead {
                tr {
                    th { "Client" }
                    th { "Plants" }
                }
            }
            tbody {
                for (id, name, plants) in clients {
                    tr {
                        key: "{id}",
                        td { "{name}" }
                        td { "{plants}" }
                    }
                }
            }
        }
    }
}
