use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextareaProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(4u32)]
    pub rows: u32,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Textarea)]
pub(crate) fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <textarea
            class={classes!("textarea", props.class.clone())}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            rows={props.rows.to_string()}
            disabled={props.disabled}
            oninput={oninput}
        />
    }
}
