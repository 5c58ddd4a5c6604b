use dioxus::prelude::*;

use store::SiteConfig;
use views::{Clients, Home, Plants, SiteLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/clients")]
        Clients {},
        #[route("/plants")]
        Plants {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const SITE_TOML: &str = include_str!("../site.toml");
const GARDEN_TOML: &str = include_str!("../garden.toml");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Failed to start runtime: {}", e);
                return;
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server error: {}", e);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> std::io::Result<()> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await
}

/// Parse the bundled `site.toml`, falling back to defaults.
fn site_config() -> SiteConfig {
    SiteConfig::from_toml(SITE_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {}", SiteConfig::filename(), e);
        SiteConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_context_provider(site_config);
    use_context_provider(|| Signal::new(ui::load_garden(GARDEN_TOML)));

    rsx! {
        // Global app resources
        document::Title { "{config.site.title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
