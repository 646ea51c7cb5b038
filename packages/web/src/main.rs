use dioxus::prelude::*;

use content::SiteConfig;
use ui::SiteProvider;
use views::{Admin, Landing};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/admin")]
    Admin {},
}

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| SiteConfig::load(SITE_TOML));
    use_hook(|| tracing::info!("Using backend at {}", config.api.base_url()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::SITE_CSS }

        SiteProvider {
            config,
            Router::<Route> {}
        }
    }
}
