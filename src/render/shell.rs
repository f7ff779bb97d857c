//! Shell composition: fragment → complete HTML document.

use maud::{html, Markup, DOCTYPE};

use crate::config::schema::{ChromeConfig, StylesheetLink};
use crate::render::chrome;
use crate::render::metadata::PageMetadata;

/// Wrap a rendered fragment in the full document shell.
///
/// Stylesheet links are emitted in declaration order, global sheets
/// first, then route-specific sheets parent→leaf; later rules override
/// earlier ones. The same composition serves success and failure pages,
/// so the chrome is present on every document the server produces.
pub fn compose(
    fragment: Markup,
    metadata: &PageMetadata,
    global_stylesheets: &[StylesheetLink],
    route_stylesheets: &[StylesheetLink],
    chrome_config: &ChromeConfig,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (metadata.title) }
                @if let Some(description) = &metadata.description {
                    meta name="description" content=(description);
                }
                @for sheet in global_stylesheets.iter().chain(route_stylesheets) {
                    link rel="stylesheet" href=(sheet.href) media=[sheet.media.as_deref()];
                }
            }
            body {
                div class="site" {
                    (chrome::header(chrome_config))
                    div class="site-main" {
                        div class="container site-main__content" {
                            (fragment)
                        }
                    }
                    (chrome::footer(chrome_config))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    fn compose_default(route_sheets: &[StylesheetLink]) -> String {
        compose(
            html! { p { "content" } },
            &PageMetadata::new("Test Title").with_description("a test"),
            &[
                StylesheetLink::new("/styles/global.css"),
                StylesheetLink::new("/styles/dark.css")
                    .with_media("(prefers-color-scheme: dark)"),
            ],
            route_sheets,
            &ChromeConfig::default(),
        )
        .into_string()
    }

    #[test]
    fn document_has_doctype_charset_viewport_and_title() {
        let doc = compose_default(&[]);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
        assert!(doc.contains(r#"<meta charset="utf-8">"#));
        assert!(doc.contains(r#"<meta name="viewport" content="width=device-width,initial-scale=1">"#));
        assert!(doc.contains("<title>Test Title</title>"));
        assert!(doc.contains(r#"<meta name="description" content="a test">"#));
    }

    #[test]
    fn global_stylesheets_precede_route_stylesheets() {
        let doc = compose_default(&[StylesheetLink::new("/styles/about.css")]);
        let global = doc.find("/styles/global.css").unwrap();
        let dark = doc.find("/styles/dark.css").unwrap();
        let about = doc.find("/styles/about.css").unwrap();
        assert!(global < dark && dark < about);
        assert!(doc.contains(r#"media="(prefers-color-scheme: dark)""#));
    }

    #[test]
    fn chrome_wraps_the_fragment() {
        let doc = compose_default(&[]);
        let header = doc.find("site-header").unwrap();
        let content = doc.find("<p>content</p>").unwrap();
        let footer = doc.find("site-footer").unwrap();
        assert!(header < content && content < footer);
    }
}
