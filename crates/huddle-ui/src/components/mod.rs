pub(crate) mod action_menu;
pub(crate) mod atoms;
pub(crate) mod setting_section;
pub(crate) mod shell;
