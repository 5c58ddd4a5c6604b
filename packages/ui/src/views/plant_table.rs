use dioxus::prelude::*;

use crate::garden::use_garden;

/// Every plant with its blooming period and the months it needs work.
#[component]
pub fn PlantTable() -> Element {
    let garden = use_garden();
    let store = garden.read();

    let rows: Vec<_> = store
        .plants()
        .map(|plant| {
            let months = store
                .months_of_plant(plant.id)
                .unwrap_or_default()
                .iter()
                .map(|m| m.name())
                .collect::<Vec<_>>()
                .join(", ");
            (plant.clone(), months)
        })
        .collect();

    if rows.is_empty() {
        return rsx! {
            p { "No plants yet." }
        };
    }

    rsx! {
        table {
            class: "garden-table",
            thead {
                tr {
                    th { "Plant" }
                    th { "Latin name" }
                    th { "Blooming" }
                    th { "Maintenance" }
                }
            }
            tbody {
                for (plant, months) in rows {
                    tr {
                        key: "{plant.id.0}",
                        td { "{plant.name}" }
                        td { em { "{plant.latin_name}" } }
                        td { "{plant.blooming_period}" }
                        td { class: "garden-months", "{months}" }
                    }
                }
            }
        }
    }
}
