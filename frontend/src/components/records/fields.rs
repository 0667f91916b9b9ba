//! Labelled form inputs bound to a draft field.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A labelled `<input>`. `kind` is the HTML input type (`text`, `number`, ...).
pub fn input<F: Copy + 'static>(
    label: &str,
    kind: &'static str,
    field: F,
    value: &str,
    required: bool,
    on_edit: &Callback<(F, String)>,
) -> Html {
    let on_edit = on_edit.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit((field, input.value()));
    });

    html! {
        <div class="form-group">
            <label>{ field_label(label, required) }</label>
            <input type={kind} value={value.to_string()} {required} {oninput} />
        </div>
    }
}

/// A labelled `<select>`. `options` are `(value, text)` pairs; `placeholder`
/// adds an empty first option.
pub fn select<F: Copy + 'static>(
    label: &str,
    field: F,
    value: &str,
    options: Vec<(String, String)>,
    placeholder: Option<&str>,
    on_edit: &Callback<(F, String)>,
) -> Html {
    let on_edit = on_edit.clone();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_edit.emit((field, select.value()));
    });

    html! {
        <div class="form-group">
            <label>{ field_label(label, true) }</label>
            <select {onchange} required=true>
                {
                    if let Some(placeholder) = placeholder {
                        html! { <option value="" selected={value.is_empty()}>{ placeholder.to_string() }</option> }
                    } else {
                        html! {}
                    }
                }
                { for options.into_iter().map(|(option, text)| {
                    let selected = option == value;
                    html! { <option value={option} {selected}>{ text }</option> }
                }) }
            </select>
        </div>
    }
}

fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}
