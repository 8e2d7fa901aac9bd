//! Labelled text input with an inline validation message

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    /// Shown below the input; the caller decides when (touched fields only)
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub oninput: Callback<String>,
    pub onblur: Callback<()>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };
    let onblur = props.onblur.reform(|_: FocusEvent| ());

    let border = if props.error.is_some() {
        "border-red-500 dark:border-red-400 focus:ring-red-500"
    } else {
        "border-gray-300 dark:border-gray-600 focus:ring-blue-500"
    };

    html! {
        <div class="mb-4">
            <label for={props.name.clone()} class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                {props.label.clone()}
            </label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                {oninput}
                {onblur}
                class={classes!(
                    "w-full", "px-3", "py-2", "rounded-lg", "border", "bg-white", "dark:bg-gray-700",
                    "text-gray-900", "dark:text-gray-100", "focus:outline-none", "focus:ring-2",
                    border
                )}
            />
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}
