use yew::prelude::*;

use crate::models::recipe_models::RecipeEntry;

pub const RECIPE_CARD_CSS: &str = r#"
    .recipe-card {
        background: rgba(24, 24, 27, 0.8);
        border: 1px solid #27272a;
        border-radius: 0.75rem;
        overflow: hidden;
        display: flex;
        flex-direction: column;
        transition: border-color 0.3s ease, box-shadow 0.3s ease;
    }
    .recipe-card:hover {
        border-color: rgba(249, 115, 22, 0.5);
        box-shadow: 0 0 30px rgba(249, 115, 22, 0.15);
    }
    .recipe-card-header { display: flex; align-items: center; gap: 1rem; padding: 1.5rem 1.5rem 1rem; }
    .recipe-thumb {
        width: 4rem;
        height: 4rem;
        border-radius: 0.75rem;
        overflow: hidden;
        border: 2px solid rgba(249, 115, 22, 0.3);
        flex-shrink: 0;
    }
    .recipe-thumb img { width: 100%; height: 100%; object-fit: cover; }
    .recipe-title { font-size: 1.25rem; color: #fff; margin: 0; transition: color 0.3s ease; }
    .recipe-card:hover .recipe-title { color: #fb923c; }
    .recipe-time { color: rgba(251, 146, 60, 0.8); font-weight: 500; margin-top: 0.25rem; }
    .recipe-description { color: #a1a1aa; line-height: 1.6; padding: 0 1.5rem; flex: 1; }
    .recipe-card-footer {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 1.5rem;
        border-top: 1px solid #27272a;
    }
    .recipe-button {
        background: linear-gradient(to right, #f97316, #f59e0b);
        color: #fff;
        font-weight: 600;
        border: none;
        border-radius: 0.375rem;
        padding: 0.6rem 1.2rem;
        cursor: pointer;
        box-shadow: 0 10px 15px -3px rgba(249, 115, 22, 0.25);
    }
    .recipe-button:hover { background: linear-gradient(to right, #ea580c, #d97706); }
    .vegan-badge {
        background: rgba(16, 185, 129, 0.2);
        color: #34d399;
        border: 1px solid rgba(16, 185, 129, 0.3);
        border-radius: 9999px;
        padding: 0.2rem 0.7rem;
        font-size: 0.85rem;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub recipe: RecipeEntry,
}

#[function_component(RecipeCard)]
pub fn recipe_card(props: &RecipeCardProps) -> Html {
    let recipe = &props.recipe;
    html! {
        <div class="recipe-card">
            <div class="recipe-card-header">
                <div class="recipe-thumb">
                    {
                        match &recipe.image {
                            Some(src) => html! { <img src={src.clone()} alt={recipe.title.clone()} loading="lazy" /> },
                            None => html! {},
                        }
                    }
                </div>
                <div>
                    <h3 class="recipe-title">{&recipe.title}</h3>
                    if !recipe.time.is_empty() {
                        <div class="recipe-time">{format!("⏱ {}", recipe.time)}</div>
                    }
                </div>
            </div>
            <p class="recipe-description">{&recipe.description}</p>
            <div class="recipe-card-footer">
                <button class="recipe-button">{"View Recipe"}</button>
                if recipe.vegan {
                    <span class="vegan-badge">{"🌱 Vegan"}</span>
                }
            </div>
        </div>
    }
}
