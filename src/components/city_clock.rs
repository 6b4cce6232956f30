use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::controllers::clock::{City, CITIES};
use crate::hooks::use_clock;

#[derive(Properties, PartialEq)]
pub struct CityClockProps {
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(CityClock)]
pub fn city_clock(props: &CityClockProps) -> Html {
    let city = use_state(City::default);
    let time = use_clock(*city);

    let onchange = {
        let city = city.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = City::by_name(&select.value()) {
                city.set(selected);
            }
        })
    };

    html! {
        <div class={classes!("city-clock", props.compact.then(|| "compact"))}>
            <select class="city-select" {onchange}>
                { CITIES.iter().map(|option| html! {
                    <option value={option.name} selected={option.name == city.name}>
                        {option.name}
                    </option>
                }).collect::<Html>() }
            </select>
            <div class="city-time">{time}</div>
        </div>
    }
}
