//! Routing definitions for the Huddle client.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/threads")]
    Threads,
    #[at("/settings/notifications")]
    NotificationSettings,
    #[at("/reset_password")]
    ResetPassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}
