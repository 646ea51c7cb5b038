//! # Site configuration: `site.toml`
//!
//! Where the browser finds the REST backend and the host that serves its uploaded
//! images.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//! asset_host = "http://localhost:5000"   # optional
//! ```
//!
//! The web app embeds its `site.toml` at build time and hands the text to
//! [`SiteConfig::load`]. The web target has no process environment at runtime,
//! so `SITE_API_URL` and `SITE_ASSET_HOST` are also read at build time and win
//! over the file. When `asset_host` is unset it is derived from `base_url` by
//! dropping a trailing `/api` segment.

use serde::{Deserialize, Serialize};

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Host serving uploaded images. Derived from `base_url` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_host: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            asset_host: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            asset_host: None,
        }
    }

    /// Builder method to pin the asset host.
    pub fn with_asset_host(mut self, host: impl Into<String>) -> Self {
        self.asset_host = Some(host.into());
        self
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Host that server-relative image paths are resolved against.
    pub fn asset_host(&self) -> String {
        if let Some(host) = &self.asset_host {
            return host.trim_end_matches('/').to_string();
        }
        let base = self.base_url();
        base.strip_suffix("/api").unwrap_or(base).to_string()
    }

    /// Turn an image value from the API into something an `img` can load.
    ///
    /// Absolute URLs pass through; everything else is a path on the asset host.
    pub fn resolve_image(&self, image: &str) -> String {
        let image = image.trim();
        if image.is_empty() {
            return String::new();
        }
        if is_absolute_url(image) {
            return image.to_string();
        }
        if image.starts_with('/') {
            format!("{}{image}", self.asset_host())
        } else {
            format!("{}/{image}", self.asset_host())
        }
    }
}

fn is_absolute_url(value: &str) -> bool {
    const SCHEMES: [&str; 5] = ["http://", "https://", "//", "data:", "blob:"];
    let lower = value.to_ascii_lowercase();
    SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

impl SiteConfig {
    /// Parse `site.toml` text, falling back to the defaults when it is malformed,
    /// then apply the build-time overrides.
    pub fn load(toml_text: &str) -> Self {
        let config = match Self::from_toml(toml_text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed site.toml: {}", e);
                Self::default()
            }
        };
        config.with_overrides(option_env!("SITE_API_URL"), option_env!("SITE_ASSET_HOST"))
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Replace the backend URL and asset host with any non-blank override.
    pub fn with_overrides(mut self, api_url: Option<&str>, asset_host: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api.base_url = url.to_string();
        }
        if let Some(host) = asset_host.map(str::trim).filter(|host| !host.is_empty()) {
            self.api.asset_host = Some(host.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_image_resolves_against_api_host() {
        let config = ApiConfig::default();
        assert_eq!(
            config.resolve_image("/uploads/x.png"),
            "http://localhost:5000/uploads/x.png"
        );
        assert_eq!(
            config.resolve_image("uploads/x.png"),
            "http://localhost:5000/uploads/x.png"
        );
    }

    #[test]
    fn absolute_image_is_unchanged() {
        let config = ApiConfig::default();
        assert_eq!(
            config.resolve_image("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
        assert_eq!(
            config.resolve_image("HTTP://cdn.example.com/y.png"),
            "HTTP://cdn.example.com/y.png"
        );
        assert_eq!(config.resolve_image(""), "");
    }

    #[test]
    fn explicit_asset_host_wins() {
        let config = ApiConfig::new("https://api.example.com/v1/")
            .with_asset_host("https://static.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com/v1");
        assert_eq!(
            config.resolve_image("/uploads/a.jpg"),
            "https://static.example.com/uploads/a.jpg"
        );
    }

    #[test]
    fn asset_host_without_api_suffix_is_base() {
        let config = ApiConfig::new("https://backend.example.com");
        assert_eq!(config.asset_host(), "https://backend.example.com");
    }

    #[test]
    fn empty_toml_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn file_values_are_read() {
        let config = SiteConfig::from_toml(
            r#"
            [api]
            base_url = "https://example.com/api"
            asset_host = "https://cdn.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url(), "https://example.com/api");
        assert_eq!(config.api.asset_host(), "https://cdn.example.com");
    }

    #[test]
    fn overrides_win_over_file_unless_blank() {
        let file = SiteConfig::from_toml("[api]\nbase_url = \"https://file.example.com/api\"\n")
            .unwrap();

        let kept = file.clone().with_overrides(Some("  "), None);
        assert_eq!(kept, file);

        let overridden = file.with_overrides(
            Some("https://env.example.com/api"),
            Some("https://img.example.com"),
        );
        assert_eq!(overridden.api.base_url, "https://env.example.com/api");
        assert_eq!(
            overridden.api.asset_host.as_deref(),
            Some("https://img.example.com")
        );
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let config = SiteConfig::load("[api\nbase_url = ");
        let expected = SiteConfig::default()
            .with_overrides(option_env!("SITE_API_URL"), option_env!("SITE_ASSET_HOST"));
        assert_eq!(config, expected);
    }
}
