use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod analysis;
mod wizard;
mod components {
    pub mod animated_text;
    pub mod nav;
    pub mod hero;
    pub mod stats;
    pub mod wizard_modal;
}
mod pages {
    pub mod index;
}

use pages::index::Index;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Index,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Index => {
            info!("Rendering Index page");
            html! { <Index /> }
        },
        // Single page site: anything else lands on the same page.
        Route::NotFound => {
            info!("Unknown route, rendering Index page");
            html! { <Index /> }
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting MedSafe");
    yew::Renderer::<App>::new().render();
}
