//! Managed field values and the checkbox adapter

use dioxus::prelude::*;

/// Value a checked checkbox submits when the caller does not choose one
pub const DEFAULT_CHECKED_VALUE: &str = "on";

/// Value/change/focus/blur protocol of an externally managed field.
///
/// An unset value is `None`; a cleared value is the empty string.
pub trait FieldControl {
    fn value(&self) -> Option<String>;
    fn change(&mut self, value: String);
    fn focus(&mut self);
    fn blur(&mut self);
}

/// Value a checkbox emits for the given checked state
pub fn checked_value(checked: bool, sentinel: &str) -> &str {
    if checked {
        sentinel
    } else {
        ""
    }
}

/// Signal-backed field state owned by the mounted component
#[derive(Clone, Copy, PartialEq)]
pub struct InputControl {
    value: Signal<Option<String>>,
    focused: Signal<bool>,
    touched: Signal<bool>,
}

impl InputControl {
    /// Whether the control currently has focus
    pub fn is_focused(&self) -> bool {
        (self.focused)()
    }

    /// Whether the control has lost focus at least once
    pub fn is_touched(&self) -> bool {
        (self.touched)()
    }
}

impl FieldControl for InputControl {
    fn value(&self) -> Option<String> {
        self.value.read().clone()
    }

    fn change(&mut self, value: String) {
        self.value.set(Some(value));
    }

    fn focus(&mut self) {
        self.focused.set(true);
    }

    fn blur(&mut self) {
        self.focused.set(false);
        self.touched.set(true);
    }
}

/// Create the field state for a component; `initial` is read once at mount.
pub fn use_input_control(initial: Option<String>) -> InputControl {
    let value = use_signal(|| initial);
    let focused = use_signal(|| false);
    let touched = use_signal(|| false);
    InputControl {
        value,
        focused,
        touched,
    }
}

/// Translates a checkbox's checked state to a managed string value.
///
/// Checked is the sentinel and unchecked is `""`; nothing else is ever
/// written to the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxAdapter<C> {
    control: C,
    sentinel: String,
}

/// Sentinel for a checkbox given its optional `value` attribute.
///
/// Only an absent value falls back to [`DEFAULT_CHECKED_VALUE`]; an explicit
/// `value=""` is kept, which makes checked and unchecked submit the same value.
pub fn checkbox_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| DEFAULT_CHECKED_VALUE.to_string())
}

/// Managed value to start from when a checkbox mounts
pub fn initial_checkbox_value(default_checked: bool, sentinel: &str) -> Option<String> {
    default_checked.then(|| sentinel.to_string())
}

impl<C: FieldControl> CheckboxAdapter<C> {
    pub fn new(control: C, sentinel: impl Into<String>) -> Self {
        Self {
            control,
            sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn is_checked(&self) -> bool {
        self.control.value().as_deref() == Some(self.sentinel.as_str())
    }

    /// Value emitted for `checked`
    pub fn value_for(&self, checked: bool) -> String {
        checked_value(checked, &self.sentinel).to_string()
    }

    pub fn set_checked(&mut self, checked: bool) {
        let value = self.value_for(checked);
        self.control.change(value);
    }

    pub fn focus(&mut self) {
        self.control.focus();
    }

    pub fn blur(&mut self) {
        self.control.blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct RecordingControl {
        value: Option<String>,
        changes: Vec<String>,
        events: Vec<&'static str>,
    }

    impl FieldControl for RecordingControl {
        fn value(&self) -> Option<String> {
            self.value.clone()
        }

        fn change(&mut self, value: String) {
            self.changes.push(value.clone());
            self.value = Some(value);
        }

        fn focus(&mut self) {
            self.events.push("focus");
        }

        fn blur(&mut self) {
            self.events.push("blur");
        }
    }

    fn control_with(value: Option<&str>) -> RecordingControl {
        RecordingControl {
            value: value.map(str::to_string),
            ..RecordingControl::default()
        }
    }

    #[test]
    fn default_sentinel_is_on() {
        let adapter = CheckboxAdapter::new(RecordingControl::default(), checkbox_sentinel(None));
        assert_eq!(adapter.sentinel(), "on");
        assert_eq!(DEFAULT_CHECKED_VALUE, "on");
    }

    #[test]
    fn only_missing_sentinel_falls_back_to_default() {
        assert_eq!(checkbox_sentinel(None), "on");
        assert_eq!(checkbox_sentinel(Some(String::new())), "");
        assert_eq!(checkbox_sentinel(Some("yes".into())), "yes");
    }

    #[test]
    fn initial_value_follows_default_checked() {
        assert_eq!(initial_checkbox_value(true, "yes"), Some("yes".to_string()));
        assert_eq!(initial_checkbox_value(false, "yes"), None);
    }

    #[test]
    fn checked_only_when_value_equals_sentinel() {
        let cases = [
            (None, false),
            (Some(""), false),
            (Some("on"), false),
            (Some("yes"), true),
            (Some("YES"), false),
        ];
        for (value, expected) in cases {
            let adapter = CheckboxAdapter::new(control_with(value), "yes");
            assert_eq!(adapter.is_checked(), expected, "value {value:?}");
        }
    }

    #[test]
    fn toggling_emits_only_sentinel_or_empty() {
        let mut adapter = CheckboxAdapter::new(RecordingControl::default(), "on");
        adapter.set_checked(true);
        assert!(adapter.is_checked());
        adapter.set_checked(false);
        assert!(!adapter.is_checked());
        adapter.set_checked(true);

        assert_eq!(adapter.control.changes, vec!["on", "", "on"]);
    }

    #[test]
    fn focus_and_blur_reach_the_control() {
        let mut adapter = CheckboxAdapter::new(RecordingControl::default(), "on");
        adapter.focus();
        adapter.blur();
        assert_eq!(adapter.control.events, vec!["focus", "blur"]);
    }

    #[test]
    fn checked_value_maps_state() {
        assert_eq!(checked_value(true, "on"), "on");
        assert_eq!(checked_value(false, "on"), "");
        let adapter = CheckboxAdapter::new(RecordingControl::default(), "yes");
        assert_eq!(adapter.value_for(true), "yes");
        assert_eq!(adapter.value_for(false), "");
    }
}
