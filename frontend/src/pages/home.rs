use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::timeline::TimelineSection;

const HOME_CSS: &str = r#"
    .home-page {
        width: 100%;
        min-height: 100vh;
        background: #9ca3af;
        color: #111;
        margin: 0;
    }
    .product-section {
        width: 100%;
        min-height: calc(100vh - 64px);
        display: flex;
        align-items: center;
        justify-content: center;
        background: #d1d5db;
    }
    .product-frame {
        position: relative;
        width: 80vw;
        max-width: 64rem;
        aspect-ratio: 16 / 9;
        border-radius: 1.5rem;
        overflow: hidden;
    }
    .product-frame img { width: 100%; height: 100%; object-fit: cover; }
    .hero {
        width: 100%;
        min-height: calc(100vh - 64px);
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 0 1.5rem;
    }
    .hero-title { font-size: 3.75rem; font-weight: 700; letter-spacing: -0.025em; margin: 0; }
    .hero-subtitle { font-size: 2.25rem; font-weight: 700; letter-spacing: -0.025em; margin-top: 1rem; }
    .hero-cta-group { margin-top: 1.5rem; display: flex; justify-content: center; gap: 1rem; }
    .features-section { padding: 5rem 1rem; background: #e5e7eb; }
    .features-section h2 { text-align: center; font-size: 2.5rem; margin-bottom: 3rem; }
    .feature-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 2rem;
    }
    .feature-card {
        background: #fff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .feature-card h3 { margin-top: 0; font-size: 1.4rem; }
    .feature-card p { color: #4b5563; line-height: 1.6; }
    .site-footer { padding: 3rem 1rem; text-align: center; background: #111; color: #d1d5db; }
    .site-footer a { color: #fb923c; }
    @media (max-width: 768px) {
        .hero-title { font-size: 2.25rem; }
        .hero-subtitle { font-size: 1.5rem; }
    }
"#;

const FEATURES: [(&str, &str); 4] = [
    (
        "Rapid Air Technology",
        "Hot air circulates at high speed so food crisps evenly with up to 85% less oil.",
    ),
    (
        "Smart Presets",
        "Eight one-touch programs for fries, wings, fish, vegetables and more.",
    ),
    (
        "Dual Basket",
        "Cook two dishes at once and have them finish at the same time.",
    ),
    (
        "Easy Clean",
        "Non-stick, dishwasher-safe baskets come out clean in minutes.",
    ),
];

/// Section id from a location hash such as `#features`.
pub fn anchor_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash).trim();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // On mount, jump to the section named in the hash, otherwise to the top
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let target = window
                        .location()
                        .hash()
                        .ok()
                        .as_deref()
                        .and_then(anchor_from_hash)
                        .and_then(|id| window.document()?.get_element_by_id(id));
                    match target {
                        Some(element) => element.scroll_into_view(),
                        None => window.scroll_to_with_x_and_y(0.0, 0.0),
                    }
                }
                || ()
            },
            (),
        );
    }

    let learn_more = Callback::from(|_: MouseEvent| {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("features"))
        {
            element.scroll_into_view();
        }
    });

    html! {
        <main class="home-page">
            <style>{HOME_CSS}</style>
            <Nav />

            <section id="products" class="product-section">
                <div class="product-frame">
                    <img src="/img/product.svg" alt="Air Fryer" />
                </div>
            </section>

            <section class="hero">
                <h1 class="hero-title">{"Smart Air Fryer"}</h1>
                <p class="hero-subtitle">{"Crispy Food. Less Oil. More Health."}</p>
                <div class="hero-cta-group">
                    <button class="btn btn-primary btn-lg">{"Shop Now"}</button>
                    <button class="btn btn-outline btn-lg" onclick={learn_more}>{"Learn More"}</button>
                </div>
            </section>

            <TimelineSection />

            <section id="features" class="features-section">
                <h2>{"Why AirFryX"}</h2>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().map(|(title, description)| html! {
                            <div class="feature-card" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <footer id="contact" class="site-footer">
                <p>{"Questions about your AirFryX? "}<a href="mailto:hello@airfryx.com">{"hello@airfryx.com"}</a></p>
            </footer>
        </main>
    }
}
