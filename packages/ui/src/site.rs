//! Backend wiring shared by the views.
//!
//! [`SiteProvider`] puts the [`SiteConfig`] into context once at the app root;
//! views read it with [`use_site_config`] and build their client with
//! [`make_api`].

use content::SiteConfig;
use dioxus::prelude::*;

/// Provide `config` to every view below this component.
#[component]
pub fn SiteProvider(config: SiteConfig, children: Element) -> Element {
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// The config provided by the nearest [`SiteProvider`].
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// HTTP client for the configured backend.
pub fn make_api(config: &SiteConfig) -> api::HttpApi {
    api::HttpApi::new(&config.api)
}

/// Blocking yes/no prompt. Anything other than an explicit "yes" is a no.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("No confirmation prompt available, declining: {}", message);
        false
    }
}
