//! Styled primitives wrapping native elements

mod button;
mod icon;
mod label;

pub use button::{button_class, Button, ButtonLink, ButtonVariant};
pub use icon::{Icon, IconName};
pub use label::Label;
