//! Per-request state shared with components through Dioxus context.

use dioxus::prelude::*;

use scribble_core::models::{ThemeMode, User};

/// Request-scoped values every page exposes to its component tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestContext {
    /// The signed-in viewer, if any
    pub user: Option<User>,
    /// Theme preference from the request cookies
    pub theme: ThemeMode,
    /// Path of the current request, used for active link styling
    pub path: String,
    /// Raw query string of the current request, without the `?`
    pub query: Option<String>,
}

impl RequestContext {
    /// Path and query of the current request, as a same-site redirect target
    pub fn location(&self) -> String {
        match self.query.as_deref().filter(|query| !query.is_empty()) {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Path that relative links inside a route resolve against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBase(pub String);

/// The signed-in viewer, or `None` for anonymous requests
pub fn use_optional_user() -> Option<User> {
    try_use_context::<RequestContext>().and_then(|context| context.user)
}

/// Path of the current request (`/` outside a request)
pub fn use_current_path() -> String {
    try_use_context::<RequestContext>().map_or_else(|| "/".to_string(), |context| context.path)
}

/// Path and query of the current request (`/` outside a request)
pub fn use_current_location() -> String {
    try_use_context::<RequestContext>()
        .map_or_else(|| "/".to_string(), |context| context.location())
}

/// Base path for relative links of the enclosing route (`/` when unset)
pub fn use_route_base() -> String {
    try_use_context::<RouteBase>().map_or_else(|| "/".to_string(), |base| base.0)
}

/// Theme preference of the current request
pub fn use_theme_mode() -> ThemeMode {
    try_use_context::<RequestContext>().map(|context| context.theme).unwrap_or_default()
}

/// Provides request state to every component below it
#[component]
pub fn RequestScope(context: RequestContext, children: Element) -> Element {
    use_context_provider(|| context);
    rsx! {
        {children}
    }
}

/// Resolves relative links below it against `base`
#[component]
pub fn RouteScope(#[props(into)] base: String, children: Element) -> Element {
    use_context_provider(|| RouteBase(base));
    rsx! {
        {children}
    }
}
