use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_waitlist_form;

#[derive(Properties, PartialEq)]
pub struct WaitlistSignupProps {
    pub on_registered: Callback<()>,
    #[prop_or_default]
    pub on_press: Callback<MouseEvent>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(WaitlistSignup)]
pub fn waitlist_signup(props: &WaitlistSignupProps) -> Html {
    let form = use_waitlist_form();
    let submitting = form.is_submitting();

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set_email(input.value());
        })
    };

    let onclick = {
        let form = form.clone();
        let on_registered = props.on_registered.clone();
        let on_press = props.on_press.clone();
        Callback::from(move |e: MouseEvent| {
            on_press.emit(e);
            form.submit(on_registered.clone());
        })
    };

    let onkeydown = {
        let form = form.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                form.submit(on_registered.clone());
            }
        })
    };

    html! {
        <div class={classes!("waitlist-signup", props.compact.then(|| "compact"))}>
            <div class="section-label">{"JOIN THE WAITLIST"}</div>
            <div class="email-field">
                <input
                    type="email"
                    placeholder="EMAIL"
                    value={form.email()}
                    {oninput}
                    {onkeydown}
                />
                {
                    if let Some(error) = form.error() {
                        html! { <div class="email-error">{error}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button class="club-button send-button" disabled={submitting} {onclick}>
                { if submitting { "..." } else { "SEND" } }
            </button>
        </div>
    }
}
