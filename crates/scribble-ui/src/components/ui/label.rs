use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(extends = GlobalAttributes)]
    #[props(extends = label)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        label { class: "ui-label", ..attributes, {children} }
    }
}
