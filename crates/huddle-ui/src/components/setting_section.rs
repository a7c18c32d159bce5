//! Expandable settings section with a collapsed summary row.
//!
//! # Design
//! - Collapsed rows show the section title plus a one-line description of
//!   the current choice; expanding swaps in the caller's edit controls.
//! - Save and cancel are emitted upward; this component never touches the
//!   form state itself.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingSectionProps {
    pub title: AttrValue,
    /// One-line summary of the current choice, shown while collapsed.
    pub describe: AttrValue,
    pub edit_label: AttrValue,
    pub save_label: AttrValue,
    pub saving_label: AttrValue,
    pub cancel_label: AttrValue,
    pub expanded: bool,
    #[prop_or_default]
    pub saving: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Longer explainer rendered under the controls while expanded.
    #[prop_or_default]
    pub extra_info: Option<Html>,
    pub on_expand: Callback<()>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SettingSection)]
pub(crate) fn setting_section(props: &SettingSectionProps) -> Html {
    if !props.expanded {
        let on_expand = props.on_expand.clone();
        return html! {
            <div class="setting-section collapsed">
                <div class="setting-summary">
                    <h4>{props.title.clone()}</h4>
                    <p class="muted">{props.describe.clone()}</p>
                </div>
                <button
                    type="button"
                    class="ghost"
                    onclick={Callback::from(move |_| on_expand.emit(()))}>
                    {props.edit_label.clone()}
                </button>
            </div>
        };
    }

    let on_save = props.on_save.clone();
    let on_cancel = props.on_cancel.clone();
    let save_label = if props.saving {
        props.saving_label.clone()
    } else {
        props.save_label.clone()
    };
    html! {
        <div class="setting-section expanded">
            <h4>{props.title.clone()}</h4>
            <div class="setting-body">
                {for props.children.iter()}
            </div>
            {props.extra_info.clone().map(|info| html! {
                <div class="muted setting-info">{info}</div>
            }).unwrap_or_default()}
            {props.error.clone().map(|message| html! {
                <p class="error-text">{message}</p>
            }).unwrap_or_default()}
            <div class="actions">
                <button
                    type="button"
                    class="ghost"
                    disabled={props.saving}
                    onclick={Callback::from(move |_| on_cancel.emit(()))}>
                    {props.cancel_label.clone()}
                </button>
                <button
                    type="button"
                    class="solid"
                    disabled={props.saving}
                    onclick={Callback::from(move |_| on_save.emit(()))}>
                    {save_label}
                </button>
            </div>
        </div>
    }
}
