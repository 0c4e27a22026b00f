use yew::prelude::*;
use yew_router::components::Link;

use crate::components::nav::Nav;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found-page" style="min-height: 100vh; background: #9ca3af;">
            <Nav />
            <section style="padding: 6rem 1rem; text-align: center;">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for does not exist."}</p>
                <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
            </section>
        </main>
    }
}
