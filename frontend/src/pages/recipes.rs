use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::recipe_card::{RecipeCard, RECIPE_CARD_CSS};
use crate::components::skeleton_card::{SkeletonCard, SKELETON_CARD_COUNT};
use crate::models::recipe_models::RecipeEntry;
use crate::utils::api::load_recipes;
use crate::utils::lifecycle::InFlight;
use crate::utils::load_state::LoadState;

const RECIPES_CSS: &str = r#"
    .recipes-page {
        width: 100%;
        min-height: 100vh;
        background: linear-gradient(135deg, #09090b, #18181b, #09090b);
        color: #fff;
    }
    .recipes-page .site-header { border-bottom-color: #27272a; }
    .recipes-inner { max-width: 80rem; margin: 0 auto; padding: 4rem 1rem; }
    .recipes-header { text-align: center; margin-bottom: 3rem; }
    .recipes-title {
        font-size: 3rem;
        font-weight: 700;
        background: linear-gradient(to right, #fb923c, #fbbf24, #f97316);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        margin-bottom: 1rem;
    }
    .recipes-subtitle { color: #a1a1aa; font-size: 1.1rem; }
    .recipe-grid {
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 2rem;
    }
    .recipes-status { text-align: center; color: #a1a1aa; font-size: 1.25rem; }
    @media (max-width: 1024px) {
        .recipe-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    }
    @media (max-width: 768px) {
        .recipe-grid { grid-template-columns: 1fr; }
        .recipes-title { font-size: 2.25rem; }
    }
"#;

#[function_component(Recipes)]
pub fn recipes() -> Html {
    let recipes = use_state(LoadState::<RecipeEntry>::default);

    {
        let recipes = recipes.clone();
        use_effect_with_deps(
            move |_| {
                let in_flight = InFlight::start();
                let flag = in_flight.flag();
                let signal = in_flight.signal();
                spawn_local(async move {
                    let result = load_recipes(signal).await;
                    let applied = flag.deliver(result, |result| {
                        recipes.set(LoadState::from_result(result, "recipes"));
                    });
                    if !applied {
                        info!("Recipe load finished after unmount, discarding");
                    }
                });
                move || in_flight.cancel()
            },
            (),
        );
    }

    html! {
        <main class="recipes-page">
            <style>{RECIPES_CSS}</style>
            <style>{RECIPE_CARD_CSS}</style>
            <Nav />
            <div class="recipes-inner">
                <div class="recipes-header">
                    <h1 class="recipes-title">{"Delicious Recipes"}</h1>
                    <p class="recipes-subtitle">{"Crispy, healthy meals made with Air-FryX"}</p>
                </div>
                <RecipeGrid state={(*recipes).clone()} />
            </div>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecipeGridProps {
    pub state: LoadState<RecipeEntry>,
}

#[function_component(RecipeGrid)]
pub fn recipe_grid(props: &RecipeGridProps) -> Html {
    let body = match &props.state {
        LoadState::Loading => html! {
            <div class="recipe-grid">
                { for (0..SKELETON_CARD_COUNT).map(|i| html! { <SkeletonCard key={i} /> }) }
            </div>
        },
        LoadState::Unavailable => html! {
            <div class="recipes-status">{"Recipes are unavailable right now. Please try again later."}</div>
        },
        LoadState::Empty => html! {
            <div class="recipes-status">{"No recipes yet. Check back soon!"}</div>
        },
        LoadState::Ready(entries) => html! {
            <div class="recipe-grid">
                {
                    for entries.iter().map(|recipe| html! {
                        <RecipeCard key={recipe.id.to_string()} recipe={recipe.clone()} />
                    })
                }
            </div>
        },
    };

    html! {
        <div class="recipes-content" data-state={props.state.marker()}>
            {body}
        </div>
    }
}
