//! Header and footer chrome markup.
//!
//! Chrome content comes in as an explicit value from configuration; the
//! functions here are pure so every render of the same chrome yields the
//! same markup.

use maud::{html, Markup};

use crate::config::schema::ChromeConfig;

/// Site header: brand home link plus the navigation list.
pub fn header(chrome: &ChromeConfig) -> Markup {
    html! {
        header class="site-header" {
            div class="container site-header__content" {
                a class="site-header__home-link" href=(chrome.brand.href) title=(chrome.brand.label) {
                    (chrome.brand.label)
                }
                nav aria-label="Main navigation" class="site-header__nav" {
                    ul {
                        @for link in &chrome.nav {
                            li {
                                a href=(link.href) { (link.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Site footer.
pub fn footer(chrome: &ChromeConfig) -> Markup {
    html! {
        footer class="site-footer" {
            div class="container site-footer__content" {
                @for link in &chrome.footer {
                    a href=(link.href) { (link.label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lists_every_nav_link() {
        let chrome = ChromeConfig::default();
        let markup = header(&chrome).into_string();
        assert!(markup.contains(r#"href="/""#));
        assert!(markup.contains(r#"href="https://checkpoint.carrd.co/""#));
        assert!(markup.contains("Get Help Now"));
    }

    #[test]
    fn footer_lists_every_footer_link() {
        let chrome = ChromeConfig::default();
        let markup = footer(&chrome).into_string();
        assert!(markup.contains("follow Wellness DAO on Twitter"));
    }
}
