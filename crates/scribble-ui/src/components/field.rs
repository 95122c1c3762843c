//! Identity and error wiring shared by the field wrappers

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::dioxus_core::{Attribute, AttributeValue};
use dioxus::prelude::*;

static NEXT_FALLBACK_ID: AtomicUsize = AtomicUsize::new(0);

/// Messages that survive filtering, in their original order.
///
/// `None` and empty strings are dropped; duplicates are kept.
pub fn visible_errors(errors: &[Option<String>]) -> Vec<&str> {
    errors
        .iter()
        .filter_map(Option::as_deref)
        .filter(|message| !message.is_empty())
        .collect()
}

fn next_fallback_id() -> String {
    let id = NEXT_FALLBACK_ID.fetch_add(1, Ordering::Relaxed);
    format!("field-{id}")
}

/// Identifier allocated once when the calling component mounts.
///
/// Re-renders of the same instance keep the id; every new instance gets a
/// fresh one.
pub fn use_fallback_id() -> String {
    use_hook(next_fallback_id)
}

/// How a control, its label and its error region refer to each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentity {
    /// Id of the control, also the label's `for`
    pub id: String,
    /// Id of the error list, present only while there are errors to show
    pub error_id: Option<String>,
}

impl FieldIdentity {
    /// Resolve the identity of a field.
    ///
    /// Uses `id` when the caller supplied one and `fallback_id` otherwise.
    pub fn resolve(id: Option<String>, fallback_id: String, errors: &[Option<String>]) -> Self {
        let id = id.filter(|id| !id.is_empty()).unwrap_or(fallback_id);
        let error_id = if visible_errors(errors).is_empty() {
            None
        } else {
            Some(format!("{id}-error"))
        };
        Self { id, error_id }
    }

    /// Value of `aria-describedby`; always equal to the error id
    pub fn described_by(&self) -> Option<String> {
        self.error_id.clone()
    }

    /// Value of `aria-invalid`
    pub fn aria_invalid(&self) -> Option<&'static str> {
        self.error_id.as_ref().map(|_| "true")
    }
}

/// Native attributes passed to a field wrapper, split into the ones the
/// wrapper interprets and the ones forwarded untouched to the control.
#[derive(Debug, Default)]
pub struct FieldAttributes {
    pub id: Option<String>,
    pub class: Option<String>,
    pub value: Option<String>,
    pub rest: Vec<Attribute>,
}

/// Pull `id`, `class` and `value` out of a spread attribute list.
pub fn split_field_attributes(attributes: Vec<Attribute>) -> FieldAttributes {
    let mut split = FieldAttributes::default();
    for attribute in attributes {
        let slot = match attribute.name {
            "id" => &mut split.id,
            "class" => &mut split.class,
            "value" => &mut split.value,
            _ => {
                split.rest.push(attribute);
                continue;
            }
        };
        *slot = attribute_text(&attribute.value);
    }
    split
}

fn attribute_text(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::Text(text) => Some(text.clone()),
        AttributeValue::Int(int) => Some(int.to_string()),
        AttributeValue::Float(float) => Some(float.to_string()),
        AttributeValue::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn errors(messages: &[Option<&str>]) -> Vec<Option<String>> {
        messages.iter().map(|m| m.map(str::to_string)).collect()
    }

    #[test]
    fn visible_errors_drops_missing_and_empty() {
        let list = errors(&[None, Some(""), Some("Required"), None, Some("Too short")]);
        assert_eq!(visible_errors(&list), vec!["Required", "Too short"]);
    }

    #[test]
    fn visible_errors_keeps_duplicates_in_order() {
        let list = errors(&[Some("Required"), Some("Required")]);
        assert_eq!(visible_errors(&list), vec!["Required", "Required"]);
    }

    #[test]
    fn identity_prefers_caller_id() {
        let identity = FieldIdentity::resolve(Some("email".into()), "field-9".into(), &[]);
        assert_eq!(identity.id, "email");
        assert_eq!(identity.error_id, None);
    }

    #[test]
    fn identity_uses_fallback_without_caller_id() {
        let identity = FieldIdentity::resolve(None, "field-9".into(), &[]);
        assert_eq!(identity.id, "field-9");
    }

    #[test]
    fn identity_links_errors_only_when_visible() {
        let hidden = FieldIdentity::resolve(Some("email".into()), "f".into(), &errors(&[None, Some("")]));
        assert_eq!(hidden.error_id, None);
        assert_eq!(hidden.described_by(), None);
        assert_eq!(hidden.aria_invalid(), None);

        let shown = FieldIdentity::resolve(Some("email".into()), "f".into(), &errors(&[Some("Required")]));
        assert_eq!(shown.error_id.as_deref(), Some("email-error"));
        assert_eq!(shown.described_by(), shown.error_id);
        assert_eq!(shown.aria_invalid(), Some("true"));
    }

    #[test]
    fn described_by_and_invalid_always_agree() {
        let cases = [
            errors(&[]),
            errors(&[None]),
            errors(&[Some("")]),
            errors(&[Some("a")]),
            errors(&[None, Some("b"), Some("")]),
        ];
        for case in cases {
            let identity = FieldIdentity::resolve(None, "x".into(), &case);
            assert_eq!(identity.described_by().is_some(), identity.aria_invalid().is_some());
            assert_eq!(identity.error_id.is_none(), visible_errors(&case).is_empty());
        }
    }

    #[test]
    fn fallback_ids_are_unique() {
        assert_ne!(next_fallback_id(), next_fallback_id());
    }

    #[test]
    fn split_attributes_extracts_known_names() {
        let attributes = vec![
            Attribute::new("id", "email", None, false),
            Attribute::new("class", "wide", None, false),
            Attribute::new("name", "email", None, false),
            Attribute::new("placeholder", "you@example.com", None, false),
        ];

        let split = split_field_attributes(attributes);
        assert_eq!(split.id.as_deref(), Some("email"));
        assert_eq!(split.class.as_deref(), Some("wide"));
        assert_eq!(split.value, None);
        let forwarded: Vec<&str> = split.rest.iter().map(|a| a.name).collect();
        assert_eq!(forwarded, vec!["name", "placeholder"]);
    }
}
