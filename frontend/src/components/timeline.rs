use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loader::Loader;
use crate::models::common::EntryKey;
use crate::models::timeline_models::TimelineEntry;
use crate::reveal::observer::ScrollRevealObserver;
use crate::reveal::visibility::{RevealAction, Side, VisibilitySet, VisualState};
use crate::utils::api::load_timeline;
use crate::utils::lifecycle::InFlight;
use crate::utils::load_state::LoadState;

const TIMELINE_CSS: &str = r#"
    .timeline-section {
        background: linear-gradient(135deg, #9333ea, #4f46e5, #2563eb);
        padding: 5rem 1rem;
    }
    .timeline-inner { max-width: 72rem; margin: 0 auto; }
    .timeline-heading {
        font-size: 3rem;
        font-weight: 700;
        color: #fff;
        text-align: center;
        margin-bottom: 4rem;
    }
    .timeline-status { text-align: center; color: #fff; font-size: 1.25rem; }
    .timeline-track { position: relative; }
    .timeline-line {
        position: absolute;
        left: 50%;
        transform: translateX(-50%);
        width: 4px;
        height: 100%;
        background: rgba(255, 255, 255, 0.3);
    }
    .timeline-item {
        position: relative;
        display: flex;
        align-items: center;
        margin-bottom: 6rem;
        transition: opacity 1s ease, transform 1s ease;
    }
    .timeline-item.side-start { justify-content: flex-end; padding-right: calc(50% + 40px); }
    .timeline-item.side-end { justify-content: flex-start; padding-left: calc(50% + 40px); }
    .timeline-item.is-hidden { opacity: 0; }
    .timeline-item.is-hidden.side-start { transform: translateX(-8rem); }
    .timeline-item.is-hidden.side-end { transform: translateX(8rem); }
    .timeline-item.is-revealed { opacity: 1; transform: translateX(0); }
    .timeline-dot {
        position: absolute;
        left: 50%;
        transform: translateX(-50%);
        width: 1.25rem;
        height: 1.25rem;
        background: #fff;
        border: 4px solid #a855f7;
        border-radius: 9999px;
        z-index: 1;
    }
    .timeline-body { display: flex; gap: 1.5rem; }
    .timeline-item.side-start .timeline-body { flex-direction: row-reverse; }
    .timeline-card {
        background: #fff;
        border-radius: 1rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        padding: 1.5rem;
        max-width: 28rem;
    }
    .timeline-year { color: #9333ea; font-weight: 700; }
    .timeline-title { font-size: 1.5rem; font-weight: 700; color: #1f2937; margin-top: 0.5rem; }
    .timeline-description { color: #4b5563; margin-top: 0.5rem; }
    .timeline-image {
        width: 16rem;
        height: 12rem;
        border-radius: 0.75rem;
        overflow: hidden;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
    }
    .timeline-image img { width: 100%; height: 100%; object-fit: cover; }
    @media (max-width: 768px) {
        .timeline-heading { font-size: 2.25rem; }
        .timeline-line, .timeline-dot { left: 1rem; }
        .timeline-item.side-start, .timeline-item.side-end {
            justify-content: flex-start;
            padding-left: 2.5rem;
            padding-right: 0;
        }
        .timeline-body, .timeline-item.side-start .timeline-body { flex-direction: column; }
        .timeline-image { width: 100%; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub entry: TimelineEntry,
    pub side: Side,
    pub state: VisualState,
    pub region: NodeRef,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let entry = &props.entry;
    html! {
        <div
            ref={props.region.clone()}
            class={classes!("timeline-item", props.side.class(), props.state.class())}
            data-entry={entry.id.to_string()}
        >
            <div class="timeline-dot"></div>
            <div class="timeline-body">
                <div class="timeline-card">
                    <span class="timeline-year">{&entry.year}</span>
                    <h3 class="timeline-title">{&entry.title}</h3>
                    <p class="timeline-description">{&entry.description}</p>
                </div>
                if let Some(src) = &entry.image {
                    <div class="timeline-image">
                        <img src={src.clone()} alt={entry.title.clone()} loading="lazy" />
                    </div>
                }
            </div>
        </div>
    }
}

/// "Our Journey": fetches the milestones once per mount and reveals each one as it
/// scrolls into view.
#[function_component(TimelineSection)]
pub fn timeline_section() -> Html {
    let timeline = use_state(LoadState::<TimelineEntry>::default);
    let visible = use_reducer(VisibilitySet::new);

    // Load the timeline once; a completion after unmount is dropped
    {
        let timeline = timeline.clone();
        use_effect_with_deps(
            move |_| {
                let in_flight = InFlight::start();
                let flag = in_flight.flag();
                let signal = in_flight.signal();
                spawn_local(async move {
                    let result = load_timeline(signal).await;
                    let applied = flag.deliver(result, |result| {
                        timeline.set(LoadState::from_result(result, "timeline"));
                    });
                    if !applied {
                        info!("Timeline load finished after unmount, discarding");
                    }
                });
                move || in_flight.cancel()
            },
            (),
        );
    }

    let entries: Rc<Vec<TimelineEntry>> = timeline.entries().cloned().unwrap_or_default();

    // One region per entry, rebuilt whenever the entry set changes
    let regions = use_memo(
        |entries: &Rc<Vec<TimelineEntry>>| {
            entries
                .iter()
                .map(|entry| (entry.id.clone(), NodeRef::default()))
                .collect::<Vec<(EntryKey, NodeRef)>>()
        },
        entries.clone(),
    );

    // Observe after the regions are in the DOM; the old observer goes with the old entries
    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |regions: &Rc<Vec<(EntryKey, NodeRef)>>| {
                let observer = if regions.is_empty() {
                    None
                } else {
                    let on_reveal = {
                        let dispatcher = dispatcher.clone();
                        Callback::from(move |key: EntryKey| {
                            dispatcher.dispatch(RevealAction::Seen(key));
                        })
                    };
                    match ScrollRevealObserver::observe(regions, on_reveal) {
                        Ok(observer) => {
                            info!("Observing {} timeline entries", observer.observed());
                            Some(observer)
                        }
                        Err(e) => {
                            error!("Could not start scroll reveal: {:?}", e);
                            warn!("Revealing all timeline entries without scroll tracking");
                            for (key, _) in regions.iter() {
                                dispatcher.dispatch(RevealAction::Seen(key.clone()));
                            }
                            None
                        }
                    }
                };
                move || drop(observer)
            },
            regions.clone(),
        );
    }

    html! {
        <section class="timeline-section">
            <style>{TIMELINE_CSS}</style>
            <div class="timeline-inner">
                <h2 class="timeline-heading">{"Our Journey"}</h2>
                <TimelineContent
                    state={(*timeline).clone()}
                    visible={(*visible).clone()}
                    regions={regions}
                />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineContentProps {
    pub state: LoadState<TimelineEntry>,
    pub visible: VisibilitySet,
    /// One `(id, region)` per entry, in entry order.
    pub regions: Rc<Vec<(EntryKey, NodeRef)>>,
}

/// Renders whichever of loading, unavailable, empty or the alternating track applies.
#[function_component(TimelineContent)]
pub fn timeline_content(props: &TimelineContentProps) -> Html {
    let body = match &props.state {
        LoadState::Loading => html! {
            <div class="timeline-status">
                <Loader />
                <p>{"Loading timeline..."}</p>
            </div>
        },
        LoadState::Unavailable => html! {
            <div class="timeline-status">{"The timeline is unavailable right now"}</div>
        },
        LoadState::Empty => html! {
            <div class="timeline-status">{"No timeline data available"}</div>
        },
        LoadState::Ready(entries) => html! {
            <div class="timeline-track">
                <div class="timeline-line"></div>
                {
                    for entries.iter().zip(props.regions.iter()).enumerate().map(|(index, (entry, (_, region)))| {
                        html! {
                            <TimelineItem
                                key={entry.id.to_string()}
                                entry={entry.clone()}
                                side={Side::for_index(index)}
                                state={VisualState::of(&props.visible, &entry.id)}
                                region={region.clone()}
                            />
                        }
                    })
                }
            </div>
        },
    };

    html! {
        <div class="timeline-content" data-state={props.state.marker()}>
            {body}
        </div>
    }
}
