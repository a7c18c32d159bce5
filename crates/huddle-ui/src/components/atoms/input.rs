use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(TextInput)]
pub(crate) fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <input
            class={classes!("input", props.class.clone())}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            id={props.id.clone()}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            oninput={oninput}
        />
    }
}
