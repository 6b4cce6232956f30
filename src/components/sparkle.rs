use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::controllers::sparkle::{burst, sparkle_path, SPARKLE_COLOR};

#[derive(Properties, PartialEq)]
pub struct SparkleBurstProps {
    pub x: f64,
    pub y: f64,
}

#[function_component(SparkleBurst)]
pub fn sparkle_burst(props: &SparkleBurstProps) -> Html {
    let (x, y) = (props.x, props.y);
    // Scattered once per mount; a new burst gets a new key.
    let sparkles = use_state(move || burst(x, y, Math::random));

    sparkles
        .iter()
        .map(|sparkle| {
            let size = sparkle.size;
            let style = format!(
                "position: fixed; z-index: 9999; pointer-events: none; top: {}px; left: {}px; \
                 animation: sparkle-fade-scale 0.7s ease-in-out forwards; transform: {};",
                sparkle.top,
                sparkle.left,
                sparkle.transform()
            );
            html! {
                <svg width={size.to_string()} height={size.to_string()} viewBox={format!("0 0 {} {}", size, size)} fill={SPARKLE_COLOR} {style}>
                    <path d={sparkle_path(size)} />
                </svg>
            }
        })
        .collect::<Html>()
}
