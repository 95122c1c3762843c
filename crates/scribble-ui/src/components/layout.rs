//! Page chrome: header, sidebar, main region and toolbar

use dioxus::prelude::*;

use super::link::{Link, NavLink, Prefetch};
use super::search_bar::SearchBar;
use super::ui::{button_class, ButtonLink, ButtonVariant, Icon, IconName};
use crate::context::use_optional_user;
use scribble_core::models::User;

/// Id of the logout form inside the user menu
pub const LOGOUT_FORM_ID: &str = "logout-form";

#[component]
pub fn Logo() -> Element {
    rsx! {
        div { class: "logo", "{{ }}" }
    }
}

/// Menu for the signed-in viewer with profile, notes and logout entries
#[component]
pub fn UserDropdown(user: User) -> Element {
    let display_name = user.display_name().to_string();
    let image_src = user.image_src();
    let username = user.username.clone();

    rsx! {
        details { class: "dropdown",
            summary { class: button_class(ButtonVariant::Outline, None),
                img { class: "avatar", alt: "{display_name}", src: "{image_src}" }
                span { "{display_name}" }
            }
            ul { class: "dropdown-content", role: "menu",
                li { role: "none",
                    Link {
                        to: "/users/{username}",
                        prefetch: Prefetch::Intent,
                        class: "dropdown-item",
                        role: "menuitem",
                        Icon { name: IconName::Avatar, "Profile" }
                    }
                }
                li { role: "none",
                    Link {
                        to: "/users/{username}/notes",
                        prefetch: Prefetch::Intent,
                        class: "dropdown-item",
                        role: "menuitem",
                        Icon { name: IconName::Pencil, "Notes" }
                    }
                }
                li { class: "dropdown-separator", role: "separator" }
                li { role: "none",
                    form { id: LOGOUT_FORM_ID, action: "/logout", method: "POST",
                        button {
                            r#type: "submit",
                            class: "dropdown-item",
                            role: "menuitem",
                            // the client script submits the form before the menu closes
                            "data-submit-form": LOGOUT_FORM_ID,
                            Icon { name: IconName::Exit, "Logout" }
                        }
                    }
                }
            }
        }
    }
}

/// Header with logo, search, user menu and theme switch above the page body
#[component]
pub fn Layout(theme_switch: Element, children: Element) -> Element {
    let user = use_optional_user();

    rsx! {
        div { class: "layout",
            header { class: "layout-header",
                nav { class: "layout-nav",
                    Link { to: "/", class: "logo-link", Logo {} }
                    div { class: "layout-search",
                        SearchBar {}
                    }
                    if let Some(user) = user {
                        UserDropdown { user }
                    } else {
                        ButtonLink { href: "/login", "Log In" }
                    }
                    {theme_switch}
                    div { class: "layout-search-mobile",
                        SearchBar {}
                    }
                }
            }
            div { class: "layout-body", {children} }
        }
    }
}

#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        aside { class: "sidebar", {children} }
    }
}

/// Sidebar entry that highlights while its target (or a page below it) is
/// open.
#[component]
pub fn SidebarNavItem(
    #[props(into)] to: String,
    #[props(into)] class: Option<String>,
    children: Element,
) -> Element {
    let base_class = class.map_or_else(
        || "sidebar-nav-item".to_string(),
        |extra| format!("sidebar-nav-item {extra}"),
    );

    rsx! {
        li {
            NavLink {
                to,
                base_class,
                active_class: "sidebar-nav-item--active",
                prefetch: Prefetch::Intent,
                prevent_scroll_reset: true,
                {children}
            }
        }
    }
}

#[component]
pub fn Main(children: Element) -> Element {
    rsx! {
        main { class: "main", {children} }
    }
}

#[component]
pub fn MainTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "main-title", {children} }
    }
}

#[component]
pub fn MainContent(children: Element) -> Element {
    rsx! {
        div { class: "main-content", {children} }
    }
}

#[component]
pub fn FloatingToolbar(children: Element) -> Element {
    rsx! {
        div { class: "floating-toolbar", {children} }
    }
}
