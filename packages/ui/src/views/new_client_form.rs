use dioxus::prelude::*;
use store::{Plant, PlantId};

/// Form for adding a client and the plants in their garden.
#[component]
pub fn NewClientForm(plants: Vec<Plant>, on_create: EventHandler<(String, Vec<PlantId>)>) -> Element {
    let mut name = use_signal(String::new);
    let mut selected = use_signal(Vec::<PlantId>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let n = name().trim().to_string();
        if n.is_empty() {
            return;
        }
        on_create.call((n, selected()));
        name.set(String::new());
        selected.set(Vec::new());
    };

    rsx! {
        form {
            class: "client-form",
            onsubmit: handle_submit,
            h2 { "New client" }

            label {
                r#for: "new-client-name",
                "Name"
            }
            input {
                id: "new-client-name",
                r#type: "text",
                placeholder: "Mrs. Hudson",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }

            fieldset {
                legend { "Plants" }
                for plant in plants {
                    label {
                        key: "{plant.id.0}",
                        input {
                            r#type: "checkbox",
                            checked: selected().contains(&plant.id),
                            onchange: move |_| {
                                let mut ids = selected.write();
                                match ids.iter().position(|id| *id == plant.id) {
                                    Some(pos) => {
                                        ids.remove(pos);
                                    }
                                    None => ids.push(plant.id),
                                }
                            },
                        }
                        " {plant.name}"
                    }
                }
            }

            button { r#type: "submit", "Add client" }
        }
    }
}
