use yew::prelude::*;

use crate::controllers::notices::NoticeKind;

#[derive(Properties, PartialEq)]
pub struct NoticeDialogProps {
    pub kind: NoticeKind,
    pub on_close: Callback<NoticeKind>,
}

#[function_component(NoticeDialog)]
pub fn notice_dialog(props: &NoticeDialogProps) -> Html {
    let kind = props.kind;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(kind))
    };

    html! {
        <div class="notice-overlay" onclick={close.clone()}>
            <div
                class="notice-dialog"
                role="dialog"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="notice-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2 class="notice-title">{kind.title()}</h2>
            </div>
        </div>
    }
}
