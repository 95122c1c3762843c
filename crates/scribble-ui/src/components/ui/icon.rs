use dioxus::prelude::*;

/// Glyphs used by the layout and note pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Avatar,
    Exit,
    Laptop,
    MagnifyingGlass,
    Moon,
    Pencil,
    Plus,
    Sun,
}

impl IconName {
    const fn glyph(self) -> &'static str {
        match self {
            Self::Avatar => "\u{1F464}",
            Self::Exit => "\u{238B}",
            Self::Laptop => "\u{1F4BB}",
            Self::MagnifyingGlass => "\u{1F50D}",
            Self::Moon => "\u{263E}",
            Self::Pencil => "\u{270E}",
            Self::Plus => "+",
            Self::Sun => "\u{2600}",
        }
    }
}

/// An icon followed by optional label content
#[component]
pub fn Icon(name: IconName, class: Option<String>, children: Element) -> Element {
    let class_name = class.map_or_else(|| "icon".to_string(), |extra| format!("icon {extra}"));
    let glyph = name.glyph();
    rsx! {
        span { class: "{class_name}",
            span { aria_hidden: "true", "{glyph}" }
            {children}
        }
    }
}
