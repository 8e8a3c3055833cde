use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod pages {
    pub mod landing;
}
mod sections {
    pub mod about;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod location;
    pub mod services;
}
mod contact {
    pub mod contact_form;
    pub mod form_state;
}
mod gallery {
    pub mod catalog;
    pub mod portfolio_gallery;
    pub mod view_state;
}
mod utils {
    pub mod scroll;
    pub mod validation;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => {
            log::info!("Unknown path, sending visitor to the landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="app" dir="rtl" lang="he">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting {}", config::get_site_name());
    yew::Renderer::<App>::new().render();
}
