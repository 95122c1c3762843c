//! Server-side rendering helpers

use dioxus::prelude::*;
use scribble_core::models::ThemeMode;

/// Render a component with its props to an HTML fragment.
///
/// Each call builds and drops its own `VirtualDom`, so nothing rendered here
/// outlives the request that asked for it.
pub fn render_component<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a component that produces the `<head>` and `<body>` of a page,
/// wrapped in the `<html>` element carrying the theme preference.
pub fn render_document_string<P: Clone + 'static>(
    theme: ThemeMode,
    component: fn(P) -> Element,
    props: P,
) -> String {
    let html = format!(
        "<!DOCTYPE html><html lang=\"en\" data-theme=\"{}\">{}</html>",
        theme.as_str(),
        render_component(component, props)
    );
    tracing::debug!(bytes = html.len(), "Rendered document");
    html
}

/// Render a prop-less root, used by component tests.
#[cfg(test)]
pub(crate) fn render_root(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
