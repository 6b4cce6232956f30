use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::controllers::code::{CodeVerdict, CODE_LENGTH};
use crate::hooks::use_code_entry;

#[derive(Properties, PartialEq)]
pub struct CodeEntryFormProps {
    pub on_verdict: Callback<CodeVerdict>,
    #[prop_or_default]
    pub on_press: Callback<MouseEvent>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(CodeEntryForm)]
pub fn code_entry_form(props: &CodeEntryFormProps) -> Html {
    let entry = use_code_entry();

    let slots = (0..CODE_LENGTH)
        .map(|index| {
            let oninput = {
                let entry = entry.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if !entry.input(index, &input.value()) {
                        // Refused characters never reach the buffer; put the old value back.
                        input.set_value(&entry.value(index));
                    }
                })
            };
            let onkeydown = {
                let entry = entry.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Backspace" {
                        entry.backspace(index);
                    }
                })
            };

            html! {
                <div class="code-slot">
                    <input
                        ref={entry.node(index)}
                        type="text"
                        maxlength="1"
                        autocomplete="off"
                        aria-label={format!("Invitation code character {}", index + 1)}
                        value={entry.value(index)}
                        {oninput}
                        {onkeydown}
                    />
                </div>
            }
        })
        .collect::<Html>();

    let onclick = {
        let entry = entry.clone();
        let on_verdict = props.on_verdict.clone();
        let on_press = props.on_press.clone();
        Callback::from(move |e: MouseEvent| {
            on_press.emit(e);
            on_verdict.emit(entry.submit());
        })
    };

    html! {
        <div class={classes!("code-entry", props.compact.then(|| "compact"))}>
            <div class="section-label">{"INVITATION CODE"}</div>
            <div class="code-slots">{slots}</div>
            <button class="club-button" {onclick}>{"OK"}</button>
        </div>
    }
}
