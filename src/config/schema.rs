//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Site identity: default title/description, dev mode.
    pub site: SiteInfo,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Shared navigation and footer chrome.
    pub chrome: ChromeConfig,

    /// Stylesheet links and the static asset directory.
    pub assets: AssetConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Fallback document title for routes without a metadata fn.
    pub title: String,

    /// Fallback meta description.
    pub description: Option<String>,

    /// When true, error pages include internal failure detail.
    pub dev_mode: bool,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Wellness DAO".to_string(),
            description: Some("Welcome to Wellness DAO!".to_string()),
            dev_mode: false,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// A labelled link in the navigation or footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    pub label: String,
    /// Site-relative (`/about`) or absolute (`https://…`) href.
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Shared chrome wrapped around every rendered page, error pages included.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Brand link in the header, pointing home.
    pub brand: NavLink,

    /// Header navigation links.
    pub nav: Vec<NavLink>,

    /// Footer links.
    pub footer: Vec<NavLink>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            brand: NavLink::new("Wellness DAO", "/"),
            nav: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Get Help Now", "https://checkpoint.carrd.co/"),
            ],
            footer: vec![NavLink::new(
                "follow Wellness DAO on Twitter",
                "https://twitter.com/wellness_dao",
            )],
        }
    }
}

/// A stylesheet `<link>` emitted into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StylesheetLink {
    pub href: String,

    /// Optional media query, e.g. "(prefers-color-scheme: dark)".
    #[serde(default)]
    pub media: Option<String>,
}

impl StylesheetLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media: None,
        }
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }
}

/// Stylesheet links and static asset serving.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Stylesheets linked on every page, before route-specific ones.
    pub global_stylesheets: Vec<StylesheetLink>,

    /// Directory of static stylesheet files, served at `mount`.
    /// Set to empty to disable static serving.
    pub dir: String,

    /// URL prefix the asset directory is served under.
    pub mount: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            global_stylesheets: vec![
                StylesheetLink::new("/styles/global.css"),
                StylesheetLink::new("/styles/dark.css")
                    .with_media("(prefers-color-scheme: dark)"),
            ],
            dir: "public/styles".to_string(),
            mount: "/styles".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_site_chrome() {
        let config = SiteConfig::default();
        assert_eq!(config.chrome.brand.href, "/");
        assert!(config
            .chrome
            .nav
            .iter()
            .any(|l| l.href == "https://checkpoint.carrd.co/"));
        assert_eq!(config.assets.global_stylesheets[0].href, "/styles/global.css");
        assert_eq!(
            config.assets.global_stylesheets[1].media.as_deref(),
            Some("(prefers-color-scheme: dark)")
        );
        assert!(!config.site.dev_mode);
    }

    #[test]
    fn minimal_toml_overrides_only_what_it_names() {
        let config: SiteConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [site]
            dev_mode = true
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert!(config.site.dev_mode);
        assert_eq!(config.site.title, "Wellness DAO");
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
