use dioxus::prelude::*;

/// Error content for a failed route.
///
/// Unhandled failures show the status next to the message; a route that
/// caught the status supplies the full sentence instead.
#[component]
pub fn GeneralErrorBoundary(
    status: u16,
    #[props(into)] message: String,
    #[props(default)] caught: bool,
) -> Element {
    rsx! {
        div { class: "error-boundary",
            if caught {
                p { "{message}" }
            } else {
                p { "{status} {message}" }
            }
        }
    }
}
