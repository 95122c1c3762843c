//! Page components rendered by the route handlers

mod index;
mod notes;
mod users;

use dioxus::prelude::*;
use scribble_ui::components::{Document, GeneralErrorBoundary, Layout, Main, ThemeSwitch};
use scribble_ui::{render_document_string, RequestContext, RequestScope};

use crate::error::ErrorReport;

pub use index::render_index_page;
pub use notes::{
    note_not_found_message, owner_not_found_message, render_notes_page, NoteEditorState,
    NotesOutlet,
};
pub use users::{render_profile_page, render_users_page};

/// Document, request scope and layout shared by every page
#[component]
pub fn PageShell(context: RequestContext, #[props(into)] title: String, children: Element) -> Element {
    rsx! {
        RequestScope { context,
            Document { title,
                Layout { theme_switch: rsx! { ThemeSwitch {} }, {children} }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ErrorPageProps {
    context: RequestContext,
    status: u16,
    message: String,
    caught: bool,
}

#[allow(non_snake_case)]
fn ErrorPage(props: ErrorPageProps) -> Element {
    let title = format!("{} | Scribble", props.status);
    rsx! {
        PageShell { context: props.context, title,
            Main {
                GeneralErrorBoundary { status: props.status, message: props.message, caught: props.caught }
            }
        }
    }
}

/// Render the HTML page for a failed request.
pub fn render_error_page(context: RequestContext, report: &ErrorReport) -> String {
    render_document_string(
        context.theme,
        ErrorPage,
        ErrorPageProps {
            context,
            status: report.status.as_u16(),
            message: report.message.clone(),
            caught: report.caught,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn error_page_uses_layout_and_boundary() {
        let report = ErrorReport {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            caught: false,
        };

        let html = render_error_page(RequestContext::default(), &report);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>500 | Scribble</title>"));
        assert!(html.contains("500 Internal server error"));
        assert!(html.contains("Log In"));
    }
}
