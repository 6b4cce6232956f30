use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Mirrors the pointer into `--cursor-x` / `--cursor-y` on `<body>` for the
/// CSS cursor trail. The listener lives exactly as long as this component.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    use_effect_with_deps(
        move |_| {
            let listener = web_sys::window().map(|window| {
                let document = window.document();
                let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
                    if let Some(body) = document.as_ref().and_then(|d| d.body()) {
                        let style = body.style();
                        let _ = style.set_property("--cursor-x", &format!("{}px", e.client_x()));
                        let _ = style.set_property("--cursor-y", &format!("{}px", e.client_y()));
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                let _ = window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                (window, on_move)
            });

            move || {
                if let Some((window, on_move)) = listener {
                    let _ = window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );

    html! {}
}
