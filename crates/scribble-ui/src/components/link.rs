//! Anchors with prefetch and scroll hints understood by the client script

use dioxus::prelude::*;

use crate::context::{use_current_path, use_route_base};

/// When the client script should prefetch a link's target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prefetch {
    #[default]
    None,
    /// On hover or keyboard focus
    Intent,
}

impl Prefetch {
    const fn attribute(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Intent => Some("intent"),
        }
    }
}

/// Resolve `to` against the enclosing route's base path.
///
/// Absolute targets are returned unchanged; `.` is the base itself.
pub fn resolve_href(base: &str, to: &str) -> String {
    if to.starts_with('/') || to.contains("://") {
        return to.to_string();
    }
    let base = base.trim_end_matches('/');
    match to.trim_start_matches("./") {
        "" | "." => {
            if base.is_empty() {
                "/".to_string()
            } else {
                base.to_string()
            }
        }
        relative => format!("{base}/{relative}"),
    }
}

/// Whether a link to `target` is active at `current`.
///
/// A link stays active on paths below its target unless `end` is set.
pub fn is_active_path(current: &str, target: &str, end: bool) -> bool {
    let current = current.trim_end_matches('/');
    let target = target.trim_end_matches('/');
    if current == target {
        return true;
    }
    if end {
        return false;
    }
    if target.is_empty() {
        return false;
    }
    current
        .strip_prefix(target)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Link(
    #[props(into)] to: String,
    #[props(default)] prefetch: Prefetch,
    #[props(default)] prevent_scroll_reset: bool,
    #[props(extends = GlobalAttributes)]
    #[props(extends = a)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let href = resolve_href(&use_route_base(), &to);
    rsx! {
        a {
            href: "{href}",
            "data-prefetch": prefetch.attribute(),
            "data-prevent-scroll-reset": prevent_scroll_reset.then_some("true"),
            ..attributes,
            {children}
        }
    }
}

/// A link that knows whether it points at the current page
#[component]
pub fn NavLink(
    #[props(into)] to: String,
    #[props(into, default)] base_class: String,
    #[props(into, default)] active_class: String,
    #[props(default)] end: bool,
    #[props(default)] prefetch: Prefetch,
    #[props(default)] prevent_scroll_reset: bool,
    children: Element,
) -> Element {
    let href = resolve_href(&use_route_base(), &to);
    let active = is_active_path(&use_current_path(), &href, end);
    let class_name = match (active, active_class.is_empty()) {
        (true, false) => format!("{base_class} {active_class}"),
        _ => base_class,
    };

    rsx! {
        a {
            href: "{href}",
            class: "{class_name}",
            aria_current: active.then_some("page"),
            "data-prefetch": prefetch.attribute(),
            "data-prevent-scroll-reset": prevent_scroll_reset.then_some("true"),
            {children}
        }
    }
}
