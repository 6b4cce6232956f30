use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod hooks;
mod controllers {
    pub mod clock;
    pub mod code;
    pub mod email;
    pub mod notices;
    pub mod sparkle;
}
mod components {
    pub mod city_clock;
    pub mod code_entry;
    pub mod cursor;
    pub mod notice;
    pub mod sparkle;
    pub mod ticker;
    pub mod waitlist_signup;
}
mod pages {
    pub mod desktop;
    pub mod frame;
    pub mod mobile;
}

use pages::frame::Frame;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering waitlist page");
            html! { <Frame /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to waitlist page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
