use dioxus::prelude::*;

use crate::theme::{theme_css, CLIENT_SCRIPT, STYLES};

/// Head and body of every page; `render_document_string` adds the `<html>` element.
#[component]
pub fn Document(#[props(into)] title: String, children: Element) -> Element {
    let css = format!("{}{STYLES}", theme_css());

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width,initial-scale=1" }
            title { "{title}" }
            style { dangerous_inner_html: "{css}" }
        }
        body {
            {children}
            script { dangerous_inner_html: CLIENT_SCRIPT }
        }
    }
}
