use dioxus::prelude::*;

use super::ui::{Icon, IconName};
use crate::context::{use_current_location, use_theme_mode};
use scribble_core::models::ThemeMode;

const fn theme_icon(mode: ThemeMode) -> (IconName, &'static str) {
    match mode {
        ThemeMode::Light => (IconName::Sun, "Light"),
        ThemeMode::Dark => (IconName::Moon, "Dark"),
        ThemeMode::System => (IconName::Laptop, "System"),
    }
}

/// Posts the next theme in the cycle and returns to the current page.
#[component]
pub fn ThemeSwitch() -> Element {
    let mode = use_theme_mode();
    let redirect_to = use_current_location();
    let next = mode.next();
    let (icon, label) = theme_icon(mode);

    rsx! {
        form { method: "POST", action: "/theme", class: "theme-switch",
            input { r#type: "hidden", name: "theme", value: "{next}" }
            input { r#type: "hidden", name: "redirect_to", value: "{redirect_to}" }
            button {
                r#type: "submit",
                class: "ui-button ui-button--ghost",
                title: "Switch to {next} theme",
                Icon { name: icon,
                    span { class: "sr-only", "{label}" }
                }
            }
        }
    }
}
