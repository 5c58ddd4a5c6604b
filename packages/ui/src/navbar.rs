use dioxus::prelude::*;

use crate::icons::FaSeedling;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            span {
                class: "navbar-title",
                Icon { icon: FaSeedling, width: 16, height: 16 }
                " {title}"
            }
            {children}
        }
    }
}
