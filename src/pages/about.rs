//! About page: layout route with an index child rendered into its outlet.

use maud::{html, Markup};
use serde_json::{json, Value};

use crate::render::metadata::PageMetadata;
use crate::routing::table::{LoadError, PageRequest, RenderError};

pub fn loader(_req: &PageRequest) -> Result<Value, LoadError> {
    Ok(json!({}))
}

pub fn metadata(_data: &Value) -> PageMetadata {
    PageMetadata::new("About Wellness DAO")
}

pub fn component(_data: &Value, outlet: Option<Markup>) -> Result<Markup, RenderError> {
    Ok(html! {
        div class="about" {
            div class="about__intro" {
                h2 { "About Us" }
                p {
                    "Ok, so this page isn't really " em { "about us" }
                    ", but we did want to tell you how this project started."
                }
                p {
                    "We'll have more coming soon, but " em { "for now" } " "
                    a href="https://mirror.xyz/joshcs.eth/gOIvBzBkt5pHL5DxPJTWkIKKXAUmfOAAQS0kZcoWj6Q" {
                        "here's a bit about what spurred the idea"
                    }
                    "."
                }
                hr;
                @if let Some(outlet) = outlet {
                    (outlet)
                }
            }
        }
    })
}

pub fn index_loader(_req: &PageRequest) -> Result<Value, LoadError> {
    Ok(json!({}))
}

pub fn index_component(_data: &Value, _outlet: Option<Markup>) -> Result<Markup, RenderError> {
    Ok(html! {
        div class="about__more" {
            p {
                "Until then, head back "
                a href="/" { "home" }
                " and check out our Resources."
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PageRequest {
        PageRequest {
            path: "/about".to_string(),
            query: None,
            params: Default::default(),
        }
    }

    #[test]
    fn outlet_fragment_lands_after_the_intro() {
        let payload = loader(&request()).unwrap();
        let child = index_component(&index_loader(&request()).unwrap(), None).unwrap();
        let markup = component(&payload, Some(child)).unwrap().into_string();
        let intro = markup.find("About Us").unwrap();
        let more = markup.find("about__more").unwrap();
        assert!(intro < more);
    }

    #[test]
    fn renders_without_an_outlet() {
        let payload = loader(&request()).unwrap();
        let markup = component(&payload, None).unwrap().into_string();
        assert!(markup.contains("About Us"));
        assert!(!markup.contains("about__more"));
    }
}
