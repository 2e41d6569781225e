use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod dom;
mod error;
mod signal;
mod styles;

mod motion {
    pub mod css;
    pub mod parallax;
    pub mod spring;
}
mod interaction {
    pub mod context;
    pub mod frame_loop;
    pub mod hooks;
    pub mod hover;
    pub mod pointer;
}
mod components {
    pub mod button;
    pub mod cursor;
    pub mod icon;
    pub mod mascot;
    pub mod parallax;
    pub mod reveal;
    pub mod safe_image;
}
mod sections {
    pub mod flavours;
    pub mod footer;
    pub mod header;
    pub mod heading;
    pub mod hero;
    pub mod pricing;
    pub mod showcase;
    pub mod visit;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use styles::GlobalStyles;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Just Crave It");
    yew::Renderer::<App>::new().render();
}
