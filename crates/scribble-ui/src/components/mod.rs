//! UI Components
//!
//! Form fields, layout chrome and primitives shared by every page.

mod control;
mod document;
mod error_boundary;
mod field;
mod forms;
mod layout;
mod link;
mod search_bar;
mod theme_switch;
pub mod ui;

pub use control::{
    checkbox_sentinel, checked_value, initial_checkbox_value, use_input_control,
    CheckboxAdapter, FieldControl, InputControl, DEFAULT_CHECKED_VALUE,
};
pub use document::Document;
pub use error_boundary::GeneralErrorBoundary;
pub use field::{
    split_field_attributes, use_fallback_id, visible_errors, FieldAttributes, FieldIdentity,
};
pub use forms::{CheckboxField, ErrorList, TextArea, TextField};
pub use layout::{
    FloatingToolbar, Layout, Logo, Main, MainContent, MainTitle, Sidebar, SidebarNavItem,
    UserDropdown, LOGOUT_FORM_ID,
};
pub use link::{is_active_path, resolve_href, Link, NavLink, Prefetch};
pub use scribble_core::models::ListOfErrors;
pub use search_bar::SearchBar;
pub use theme_switch::ThemeSwitch;
