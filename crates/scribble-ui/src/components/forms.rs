//! Labeled form fields with associated error lists

use dioxus::prelude::*;

use super::control::{
    checkbox_sentinel, initial_checkbox_value, use_input_control, CheckboxAdapter,
};
use super::field::{split_field_attributes, use_fallback_id, visible_errors, FieldIdentity};
use super::ui::Label;
use scribble_core::models::ListOfErrors;

fn wrapper_class(base: Option<&str>, class: Option<String>) -> Option<String> {
    match (base, class.filter(|class| !class.is_empty())) {
        (Some(base), Some(class)) => Some(format!("{base} {class}")),
        (Some(base), None) => Some(base.to_string()),
        (None, class) => class,
    }
}

/// Renders nothing unless at least one message is non-empty.
#[component]
pub fn ErrorList(id: Option<String>, #[props(default)] errors: ListOfErrors) -> Element {
    let messages = visible_errors(&errors);
    if messages.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { id, class: "error-list",
            for (index, message) in messages.into_iter().enumerate() {
                li { key: "{index}", class: "error-list-item", "{message}" }
            }
        }
    }
}

#[component]
pub fn TextField(
    #[props(into)] label: String,
    #[props(default)] errors: ListOfErrors,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let fallback_id = use_fallback_id();
    let split = split_field_attributes(attributes);
    let identity = FieldIdentity::resolve(split.id, fallback_id, &errors);
    let class_name = wrapper_class(None, split.class);

    rsx! {
        div { class: class_name,
            Label { r#for: identity.id.clone(), "{label}" }
            input {
                class: "ui-input",
                id: identity.id.clone(),
                value: split.value,
                aria_invalid: identity.aria_invalid(),
                aria_describedby: identity.described_by(),
                ..split.rest,
            }
            div { class: "field-errors",
                ErrorList { id: identity.error_id.clone(), errors }
            }
        }
    }
}

#[component]
pub fn TextArea(
    #[props(into)] label: String,
    #[props(default)] errors: ListOfErrors,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    let fallback_id = use_fallback_id();
    let split = split_field_attributes(attributes);
    let identity = FieldIdentity::resolve(split.id, fallback_id, &errors);
    let class_name = wrapper_class(None, split.class);
    let content = split.value.unwrap_or_default();

    rsx! {
        div { class: class_name,
            Label { r#for: identity.id.clone(), "{label}" }
            textarea {
                class: "ui-textarea",
                id: identity.id.clone(),
                aria_invalid: identity.aria_invalid(),
                aria_describedby: identity.described_by(),
                ..split.rest,
                "{content}"
            }
            div { class: "field-errors",
                ErrorList { id: identity.error_id.clone(), errors }
            }
        }
    }
}

/// A checkbox whose checked state is kept as a submitted string value.
///
/// The `value` attribute is the sentinel submitted when checked.
/// Focus and touch state surface as `data-focused` and `data-touched` on the
/// control wrapper.
#[component]
pub fn CheckboxField(
    #[props(into)] label: String,
    #[props(default)] errors: ListOfErrors,
    #[props(default)] default_checked: bool,
    onchange: Option<EventHandler<String>>,
    onfocus: Option<EventHandler<FocusEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let fallback_id = use_fallback_id();
    let split = split_field_attributes(attributes);
    let identity = FieldIdentity::resolve(split.id, fallback_id, &errors);
    let class_name = wrapper_class(Some("ui-checkbox-field"), split.class);

    let sentinel = checkbox_sentinel(split.value);
    let control = use_input_control(initial_checkbox_value(default_checked, &sentinel));
    let adapter = CheckboxAdapter::new(control, sentinel.clone());
    let checked = adapter.is_checked();

    rsx! {
        div { class: class_name,
            div {
                class: "ui-checkbox",
                "data-focused": control.is_focused().then_some("true"),
                "data-touched": control.is_touched().then_some("true"),
                input {
                    r#type: "checkbox",
                    class: "ui-checkbox-input",
                    id: identity.id.clone(),
                    value: sentinel,
                    checked,
                    aria_invalid: identity.aria_invalid(),
                    aria_describedby: identity.described_by(),
                    onchange: {
                        let mut adapter = adapter.clone();
                        move |event: FormEvent| {
                            let checked = event.checked();
                            adapter.set_checked(checked);
                            if let Some(handler) = &onchange {
                                handler.call(adapter.value_for(checked));
                            }
                        }
                    },
                    onfocus: {
                        let mut adapter = adapter.clone();
                        move |event: FocusEvent| {
                            adapter.focus();
                            if let Some(handler) = &onfocus {
                                handler.call(event);
                            }
                        }
                    },
                    onblur: {
                        let mut adapter = adapter.clone();
                        move |event: FocusEvent| {
                            adapter.blur();
                            if let Some(handler) = &onblur {
                                handler.call(event);
                            }
                        }
                    },
                    ..split.rest,
                }
                label { r#for: "{identity.id}", class: "ui-checkbox-label", "{label}" }
            }
            div { class: "field-errors",
                ErrorList { id: identity.error_id.clone(), errors }
            }
        }
    }
}
