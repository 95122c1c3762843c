use dioxus::prelude::*;
use scribble_ui::components::ui::{ButtonLink, ButtonVariant};
use scribble_ui::components::{Main, MainContent, MainTitle};
use scribble_ui::{render_document_string, RequestContext};

use super::PageShell;

#[derive(Props, Clone, PartialEq)]
struct IndexPageProps {
    context: RequestContext,
}

#[allow(non_snake_case)]
fn IndexPage(props: IndexPageProps) -> Element {
    let notes_href = props
        .context
        .user
        .as_ref()
        .map(|user| format!("/users/{}/notes", user.username));

    rsx! {
        PageShell { context: props.context, title: "Scribble",
            Main {
                MainTitle { "Scribble" }
                MainContent {
                    p { "Write things down, find them again." }
                    div { class: "index-actions",
                        if let Some(href) = notes_href {
                            ButtonLink { href: "{href}", "Your notes" }
                        }
                        ButtonLink { href: "/users", variant: ButtonVariant::Outline, "Browse users" }
                    }
                }
            }
        }
    }
}

pub fn render_index_page(context: RequestContext) -> String {
    render_document_string(context.theme, IndexPage, IndexPageProps { context })
}
