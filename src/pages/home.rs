//! Home page: welcome copy plus the resource and demo link lists.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::metadata::PageMetadata;
use crate::routing::table::{LoadError, PageRequest, RenderError};

#[derive(Debug, Serialize, Deserialize)]
struct HomeData {
    resources: Vec<Resource>,
    demos: Vec<Demo>,
}

/// An external resource link.
#[derive(Debug, Serialize, Deserialize)]
struct Resource {
    name: String,
    url: String,
}

/// An internal navigation link.
#[derive(Debug, Serialize, Deserialize)]
struct Demo {
    name: String,
    to: String,
}

/// Home page data. A pure read of static content today; the shape stays
/// the same if this ever comes from an upstream source.
pub fn loader(_req: &PageRequest) -> Result<Value, LoadError> {
    let data = HomeData {
        resources: vec![
            Resource {
                name: "Get Help Now ➡️ access Free Resources today".to_string(),
                url: "https://checkpoint.carrd.co/".to_string(),
            },
            Resource {
                name: "Telegram ➡️ join us anonymously".to_string(),
                url: "https://t.me/joinchat/VVzBgaurKJUyMjZh".to_string(),
            },
            Resource {
                name: "Discord ➡️ join our community".to_string(),
                url: "https://discord.gg/3ZDtHsSvBA".to_string(),
            },
            Resource {
                name: "Wellness Token Governance Demo".to_string(),
                url: "https://wellness-dao-2.vercel.app".to_string(),
            },
        ],
        demos: vec![Demo {
            name: "About Wellness DAO".to_string(),
            to: "/about".to_string(),
        }],
    };
    serde_json::to_value(data).map_err(|e| LoadError::Unexpected(e.to_string()))
}

pub fn metadata(_data: &Value) -> PageMetadata {
    PageMetadata::new("Wellness DAO").with_description("Welcome to Wellness DAO!")
}

pub fn component(data: &Value, _outlet: Option<Markup>) -> Result<Markup, RenderError> {
    let data: HomeData = serde_json::from_value(data.clone())?;
    Ok(html! {
        div class="home-page" {
            main {
                h2 { "Welcome to Wellness DAO!" }
                p { "We're happy that you're here." }
                p {
                    "We are building a "
                    a href="https://www.glosseta.com/search?term=dao" { "DAO" }
                    " dedicated to normalizing Mental-Health Care and providing Resources \
                     as a Public Good and shatter the stigmas that surround getting help."
                }
                p { "Our goal is to build a System of Community-Driven Wellness." }
                p { "Check out our Resources to get started." }
            }
            aside {
                h2 { "Resources" }
                ul {
                    @for resource in &data.resources {
                        li class="home-page__resource" {
                            a href=(resource.url) { (resource.name) }
                        }
                    }
                }
                h2 { "More" }
                ul {
                    @for demo in &data.demos {
                        li class="home-page__resource" {
                            a href=(demo.to) { (demo.name) }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> PageRequest {
        PageRequest {
            path: "/".to_string(),
            query: None,
            params: Default::default(),
        }
    }

    #[test]
    fn loader_payload_links_help_and_about() {
        let payload = loader(&request()).unwrap();
        let markup = component(&payload, None).unwrap().into_string();
        assert!(markup.contains(r#"href="https://checkpoint.carrd.co/""#));
        assert!(markup.contains(r#"href="/about""#));
        assert!(markup.contains("About Wellness DAO"));
    }

    #[test]
    fn component_renders_exactly_the_payload_it_is_given() {
        let payload = json!({
            "resources": [
                { "name": "Get Help Now", "url": "https://checkpoint.carrd.co/" }
            ],
            "demos": [
                { "name": "About Wellness DAO", "to": "/about" }
            ]
        });
        let markup = component(&payload, None).unwrap().into_string();
        assert!(markup.contains(r#"<a href="https://checkpoint.carrd.co/">Get Help Now</a>"#));
        assert!(markup.contains(r#"<a href="/about">About Wellness DAO</a>"#));
    }

    #[test]
    fn component_rejects_a_mismatched_payload() {
        let err = component(&json!({ "resources": "not-a-list" }), None).unwrap_err();
        assert!(matches!(err, RenderError::Data(_)));
    }

    #[test]
    fn metadata_names_the_site() {
        let payload = loader(&request()).unwrap();
        let resolved = metadata(&payload);
        assert_eq!(resolved.title, "Wellness DAO");
        assert_eq!(resolved.description.as_deref(), Some("Welcome to Wellness DAO!"));
    }
}
