//! Context-menu helpers for thread rows.
//!
//! # Design
//! - Keep menu rendering stateless and driven by caller-supplied items.
//! - Emit callbacks only; no side effects or state are stored here.

use crate::components::atoms::icons::IconMoreHorizontal;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone)]
pub(crate) struct ActionMenuItem {
    label: String,
    on_click: Callback<MouseEvent>,
}

impl ActionMenuItem {
    pub(crate) fn new(label: String, on_click: Callback<MouseEvent>) -> Self {
        Self { label, on_click }
    }
}

pub(crate) fn render_action_menu(trigger_label: String, items: Vec<ActionMenuItem>) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="dropdown">
            <button
                type="button"
                tabindex="0"
                aria-label={trigger_label}
                class="ghost icon-button">
                <IconMoreHorizontal />
            </button>
            <ul tabindex="0" class="dropdown-menu">
                {for items.into_iter().map(|item| {
                    html! {
                        <li>
                            <button
                                type="button"
                                class="menu-item"
                                onclick={item.on_click}>
                                {item.label}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
