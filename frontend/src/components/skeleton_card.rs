use yew::prelude::*;

/// Number of placeholder cards shown while recipes load.
pub const SKELETON_CARD_COUNT: usize = 6;

const SKELETON_CSS: &str = r#"
    .skeleton-card {
        background: rgba(24, 24, 27, 0.8);
        border: 1px solid #27272a;
        border-radius: 0.75rem;
        overflow: hidden;
    }
    .skeleton-block {
        background: #3f3f46;
        border-radius: 0.5rem;
        animation: skeleton-pulse 1.5s ease-in-out infinite;
    }
    .skeleton-block.dim { background: #27272a; }
    .skeleton-header { display: flex; align-items: center; gap: 1rem; padding: 1.5rem 1.5rem 1rem; }
    .skeleton-avatar { width: 4rem; height: 4rem; border-radius: 0.75rem; flex-shrink: 0; }
    .skeleton-lines { flex: 1; display: flex; flex-direction: column; gap: 0.5rem; }
    .skeleton-body { padding: 0 1.5rem 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
    .skeleton-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 1.5rem;
        border-top: 1px solid #27272a;
    }
    .skeleton-button { width: 7rem; height: 2.5rem; background: rgba(249, 115, 22, 0.2); }
    .skeleton-badge { width: 4rem; height: 1.5rem; border-radius: 9999px; }
    @keyframes skeleton-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
"#;

#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! {
        <div class="skeleton-card" aria-hidden="true">
            <style>{SKELETON_CSS}</style>
            <div class="skeleton-header">
                <div class="skeleton-block skeleton-avatar"></div>
                <div class="skeleton-lines">
                    <div class="skeleton-block" style="height: 1.5rem; width: 75%;"></div>
                    <div class="skeleton-block dim" style="height: 1rem; width: 33%;"></div>
                </div>
            </div>
            <div class="skeleton-body">
                <div class="skeleton-block dim" style="height: 1rem; width: 100%;"></div>
                <div class="skeleton-block dim" style="height: 1rem; width: 83%;"></div>
                <div class="skeleton-block dim" style="height: 1rem; width: 66%;"></div>
            </div>
            <div class="skeleton-footer">
                <div class="skeleton-block skeleton-button"></div>
                <div class="skeleton-block dim skeleton-badge"></div>
            </div>
        </div>
    }
}
