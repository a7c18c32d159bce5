//! Feature slices composing the Huddle client.

pub mod notifications;
pub mod password_reset;
pub mod threads;
