use dioxus::prelude::*;

use super::field::use_fallback_id;
use super::ui::{Icon, IconName};

/// User search form submitting to `/users`
#[component]
pub fn SearchBar(
    #[props(into)] default_value: Option<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    let id = use_fallback_id();
    let value = default_value.unwrap_or_default();

    rsx! {
        form { method: "GET", action: "/users", class: "search-bar",
            div { class: "search-bar-input",
                label { r#for: "{id}", class: "sr-only", "Search" }
                input {
                    r#type: "search",
                    id: "{id}",
                    name: "search",
                    class: "ui-input",
                    placeholder: "Search",
                    value: "{value}",
                    autofocus,
                }
            }
            button { r#type: "submit", class: "ui-button ui-button--primary",
                Icon { name: IconName::MagnifyingGlass,
                    span { class: "sr-only", "Search" }
                }
            }
        }
    }
}
