//! Shared form atoms used across the settings views.

pub(crate) mod checkbox;
pub(crate) mod icons;
pub(crate) mod input;
pub(crate) mod radio;
pub(crate) mod select;
pub(crate) mod textarea;
pub(crate) mod toggle;

pub(crate) use checkbox::Checkbox;
pub(crate) use input::TextInput;
pub(crate) use radio::Radio;
pub(crate) use select::Select;
pub(crate) use textarea::Textarea;
pub(crate) use toggle::Toggle;
