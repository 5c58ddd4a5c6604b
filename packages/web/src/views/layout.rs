use dioxus::prelude::*;

use store::SiteConfig;
use ui::Navbar;

use crate::Route;

#[component]
pub fn SiteLayout() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        Navbar {
            title: config.site.title.clone(),
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Clients {}, "Clients" }
            Link { to: Route::Plants {}, "Plants" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
