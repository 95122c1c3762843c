use dioxus::prelude::*;

/// Button variant mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Destructive => "ui-button--destructive",
        }
    }
}

/// Class list for a button of `variant`, with optional extra classes
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    let mut class_name = format!("ui-button {}", variant.class());
    if let Some(extra) = extra.filter(|extra| !extra.is_empty()) {
        class_name.push(' ');
        class_name.push_str(extra);
    }
    class_name
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: button_class(variant, None),
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// An anchor styled as a button
#[component]
pub fn ButtonLink(
    #[props(default)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)]
    #[props(extends = a)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        a { class: button_class(variant, None), ..attributes, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_root;

    #[test]
    fn class_includes_variant_and_extra() {
        assert_eq!(button_class(ButtonVariant::Outline, None), "ui-button ui-button--outline");
        assert_eq!(
            button_class(ButtonVariant::Primary, Some("wide")),
            "ui-button ui-button--primary wide"
        );
        assert_eq!(button_class(ButtonVariant::Ghost, Some("")), "ui-button ui-button--ghost");
    }

    #[test]
    fn button_link_renders_anchor() {
        fn root() -> Element {
            rsx! {
                ButtonLink { href: "/login", "Log In" }
            }
        }

        let html = render_root(root);
        assert!(html.contains("<a"));
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("ui-button--primary"));
        assert!(html.contains("Log In"));
    }
}
