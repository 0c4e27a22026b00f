use log::warn;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use yew_router::components::Link;
use yew_router::hooks::use_navigator;

use crate::Route;

const NAV_CSS: &str = r#"
    .site-header {
        border-bottom: 1px solid rgba(0, 0, 0, 0.1);
        position: relative;
        z-index: 20;
    }
    .nav-bar {
        display: flex;
        height: 4rem;
        align-items: center;
        justify-content: space-between;
        padding: 0 1rem;
    }
    .nav-logo {
        font-size: 1.25rem;
        font-weight: 700;
        color: inherit;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    .nav-links a {
        color: inherit;
        text-decoration: none;
        font-weight: 500;
    }
    .nav-links a:hover { text-decoration: underline; }
    .nav-toggle {
        display: none;
        background: none;
        border: none;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .btn {
        border-radius: 0.375rem;
        padding: 0.6rem 1.2rem;
        font-weight: 600;
        cursor: pointer;
        border: 1px solid #111;
    }
    .btn-primary { background: #111; color: #fff; }
    .btn-outline { background: transparent; color: #111; }
    .btn-lg { padding: 0.8rem 2rem; font-size: 1.1rem; }
    @media (max-width: 768px) {
        .nav-toggle { display: block; }
        .nav-links {
            display: none;
            position: absolute;
            top: 4rem;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 1rem;
            padding: 1rem;
            background: #d1d5db;
            border-bottom: 1px solid rgba(0, 0, 0, 0.1);
        }
        .nav-links.open { display: flex; }
        .nav-buy { display: none; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    /// Element id of the homepage section, without the `#`.
    pub anchor: AttrValue,
    pub children: Children,
}

/// Link to a section of the homepage. Routes client-side to Home, then sets the
/// hash so the section scrolls into view without reloading the app.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let anchor = props.anchor.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_hash(&anchor) {
                    warn!("Could not jump to section {}: {:?}", anchor, e);
                }
            }
        })
    };
    html! {
        <a href={format!("/#{}", props.anchor)} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Any click inside the menu is a link click, which should close it
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header">
            <style>{NAV_CSS}</style>
            <div class="nav-bar">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"AirFryX"}
                </Link<Route>>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <nav class={classes!("nav-links", (*menu_open).then_some("open"))} onclick={close_menu}>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <SectionLink anchor="products">{"Products"}</SectionLink>
                    <Link<Route> to={Route::Recipes}>{"Recipes"}</Link<Route>>
                    <SectionLink anchor="features">{"Features"}</SectionLink>
                    <SectionLink anchor="contact">{"Contact"}</SectionLink>
                </nav>
                <button class="btn btn-primary nav-buy">{"Buy Now"}</button>
            </div>
        </header>
    }
}
