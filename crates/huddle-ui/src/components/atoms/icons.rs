//! Inline SVG icons.
//!
//! Icons are decorative unless a `title` is supplied, in which case the
//! title doubles as the accessible label.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Left-pointing chevron, used as the "previous" control in headers.
#[function_component(IconChevronLeft)]
pub(crate) fn icon_chevron_left(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m15 18l-6-6l6-6" /> })
}

#[function_component(IconCheck)]
pub(crate) fn icon_check(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M20 6L9 17l-5-5" /> })
}

#[function_component(IconMoreHorizontal)]
pub(crate) fn icon_more_horizontal(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="1" />
            <circle cx="19" cy="12" r="1" />
            <circle cx="5" cy="12" r="1" />
        </> },
    )
}
