use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RadioProps {
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(Radio)]
pub(crate) fn radio(props: &RadioProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        let value = props.value.clone();
        Callback::from(move |_| onchange.emit(value.clone()))
    };

    html! {
        <label class={classes!("check-row", props.class.clone())}>
            <input
                type="radio"
                name={props.name.clone()}
                value={props.value.clone()}
                checked={props.checked}
                disabled={props.disabled}
                onclick={onchange}
            />
            {props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default()}
        </label>
    }
}
