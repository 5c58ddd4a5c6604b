use dioxus::prelude::*;
use store::{MaintenanceJob, Month};

use crate::garden::use_garden;
use crate::markdown::Markdown;

/// Jobs grouped by the month they are due in, January first.
#[component]
pub fn MaintenanceCalendar() -> Element {
    let garden = use_garden();
    let store = garden.read();

    let months: Vec<(Month, Vec<(MaintenanceJob, String)>)> = Month::ALL
        .into_iter()
        .map(|month| {
            let due = store
                .jobs()
                .filter(|job| job.months.contains(&month))
                .map(|job| {
                    let plants = store
                        .plants_of_job(job.id)
                        .unwrap_or_default()
                        .iter()
                        .map(|p| p.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    (job.clone(), plants)
                })
                .collect::<Vec<_>>();
            (month, due)
        })
        .filter(|(_, due)| !due.is_empty())
        .collect();

    if months.is_empty() {
        return rsx! {
            p { "Nothing scheduled." }
        };
    }

    rsx! {
        div {
            class: "maintenance-calendar",
            for (month, due) in months {
                section {
                    key: "{month.number()}",
                    h3 { "{month}" }
                    for (job, plants) in due {
                        div {
                            key: "{job.id.0}",
                            strong { "{job.name}" }
                            if !plants.is_empty() {
                                span { class: "garden-months", " ({plants})" }
                            }
                            Markdown { source: job.description.clone() }
                        }
                    }
                }
            }
        }
    }
}
