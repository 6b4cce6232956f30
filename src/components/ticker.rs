use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub bottom: bool,
}

/// Two copies of the same strip slide left forever, so the seam never shows.
#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    html! {
        <div class={classes!("ticker", if props.bottom { "ticker-bottom" } else { "ticker-top" })}>
            <div class="ticker-track">
                <img src={props.src.clone()} alt="Sub header waitlist" />
                <img src={props.src.clone()} alt="" aria-hidden="true" />
            </div>
        </div>
    }
}
