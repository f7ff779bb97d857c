//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check link targets are well-formed (site-relative or absolute URL)
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("site.title must not be empty")]
    EmptyTitle,

    #[error("{context}: link {label:?} has href {href:?}, expected a site-relative path or absolute URL")]
    BadLink {
        context: &'static str,
        label: String,
        href: String,
    },

    #[error("stylesheet href {0:?} must be a site-relative path or absolute URL")]
    BadStylesheet(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    BadLogLevel(String),
}

/// Validate the full configuration, collecting every error.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.site.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    let links = std::iter::once(("chrome.brand", &config.chrome.brand))
        .chain(config.chrome.nav.iter().map(|l| ("chrome.nav", l)))
        .chain(config.chrome.footer.iter().map(|l| ("chrome.footer", l)));
    for (context, link) in links {
        if !href_is_valid(&link.href) {
            errors.push(ValidationError::BadLink {
                context,
                label: link.label.clone(),
                href: link.href.clone(),
            });
        }
    }

    for sheet in &config.assets.global_stylesheets {
        if !href_is_valid(&sheet.href) {
            errors.push(ValidationError::BadStylesheet(sheet.href.clone()));
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::BadLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Hrefs are opaque to the pipeline; here we only require they are either
/// site-relative or parse as an absolute URL.
fn href_is_valid(href: &str) -> bool {
    if href.starts_with('/') {
        return href.len() == 1 || !href[1..].starts_with('/');
    }
    Url::parse(href).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{NavLink, StylesheetLink};

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error_not_just_the_first() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.timeouts.request_secs = 0;
        config.site.title = "   ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_malformed_chrome_links() {
        let mut config = SiteConfig::default();
        config.chrome.nav.push(NavLink::new("broken", "not a url"));
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::BadLink { context: "chrome.nav", .. }]
        ));
    }

    #[test]
    fn rejects_malformed_stylesheet_hrefs() {
        let mut config = SiteConfig::default();
        config
            .assets
            .global_stylesheets
            .push(StylesheetLink::new("//protocol-relative"));
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::BadStylesheet("//protocol-relative".into())]
        );
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = SiteConfig::default();
        config.observability.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::BadLogLevel("loud".into())]);
    }
}
