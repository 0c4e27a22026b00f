use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

const LOADER_VIDEO: &str = "/img/air.mp4";
const LOADER_POSTER: &str = "/img/air-poster.svg";
const LOADER_PLAYBACK_RATE: f64 = 4.0;
// HAVE_METADATA
const READY_STATE_METADATA: u16 = 1;

const LOADER_CSS: &str = r#"
    .loader-wrapper {
        display: flex;
        justify-content: center;
        align-items: center;
        padding: 2rem 0;
    }
    .loader-video {
        width: 240px;
        max-width: 60vw;
        border-radius: 1.5rem;
        pointer-events: none;
    }
"#;

/// Looping fryer clip shown while a section waits on its data.
#[function_component(Loader)]
pub fn loader() -> Html {
    let video_ref = use_node_ref();

    // Speed the clip up once metadata is in
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                        let callback = Closure::<dyn Fn()>::new({
                            let video = video.clone();
                            move || video.set_playback_rate(LOADER_PLAYBACK_RATE)
                        });
                        if let Err(e) = video.add_event_listener_with_callback(
                            "loadedmetadata",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not listen for loader metadata: {:?}", e);
                        }
                        if video.ready_state() >= READY_STATE_METADATA {
                            video.set_playback_rate(LOADER_PLAYBACK_RATE);
                        }
                        Box::new(move || {
                            let _ = video.remove_event_listener_with_callback(
                                "loadedmetadata",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <div class="loader-wrapper">
            <style>{LOADER_CSS}</style>
            <video
                ref={video_ref}
                class="loader-video"
                src={LOADER_VIDEO}
                poster={LOADER_POSTER}
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            ></video>
        </div>
    }
}
