use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;

pub mod models {
    pub mod common;
    pub mod recipe_models;
    pub mod timeline_models;
}

pub mod utils {
    pub mod api;
    pub mod lifecycle;
    pub mod load_state;
}

pub mod reveal {
    pub mod observer;
    pub mod visibility;
}

pub mod components {
    pub mod loader;
    pub mod nav;
    pub mod recipe_card;
    pub mod skeleton_card;
    pub mod timeline;
}

pub mod pages {
    pub mod home;
    pub mod not_found;
    pub mod recipes;
}

use pages::{home::Home, not_found::NotFound, recipes::Recipes};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/recipes")]
    Recipes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Recipes => html! { <Recipes /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Install the console logger and mount the app on `<body>`.
pub fn run() {
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("Starting AirFryX frontend");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/recipes"), Some(Route::Recipes));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Recipes.to_path(), "/recipes");
    }
}
