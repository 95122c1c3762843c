//! scribble-ui - Server-rendered components for Scribble
//!
//! Dioxus components for form fields, the layout shell and shared UI
//! primitives, plus the helpers that render them to HTML.

pub mod components;
pub mod context;
pub mod render;
pub mod theme;

pub use context::{RequestContext, RequestScope, RouteBase, RouteScope};
pub use render::{render_component, render_document_string};
