//! Discover demo slide
//!
//! A mocked Local Scout discovery screen: the simulated user picks a location,
//! types a search, applies the Trips filter, hovers a result, zooms the map and
//! reveals an insight, then the screen fades out and the loop restarts.
//! With reduced motion the finished screen is shown without any animation.

use leptos::prelude::*;

use crate::core::{SlideProps, StepName};
use crate::ui::animated_cursor::AnimatedCursor;
use crate::ui::frame_loop::use_discover_sequence;

/// Mock result cards: (title, neighbourhood, price)
const RESULTS: [(&str, &str, &str); 3] = [
    ("Coffee farm tour", "Santa Elena", "$45"),
    ("Comuna 13 graffiti walk", "San Javier", "$20"),
    ("Specialty coffee crawl", "El Poblado", "$30"),
];

const FILTERS: [&str; 4] = ["All", "Trips", "Food", "Events"];

const STATIC_CAPTION: &str = "Plan like a local";

/// Animated Discover slide (static when motion is reduced)
#[component]
pub fn DiscoverSlide() -> impl IntoView {
    let (state, status) = use_discover_sequence();

    let props = Memo::new(move |_| {
        if status.get().is_static() {
            SlideProps::resting()
        } else {
            state.with(SlideProps::from_state)
        }
    });
    let step_name = move || {
        state.with(|s| {
            s.current_step
                .map(|step| step.to_string())
                .unwrap_or_else(|| "idle".to_string())
        })
    };

    view! {
        <div
            class="discover-slide relative w-full max-w-3xl mx-auto"
            data-step=step_name
            data-static=move || status.get().is_static().to_string()
        >
            <MockScreen props=props />
            <AnimatedCursor frame=Signal::derive(move || props.get().cursor) />
            <p class="discover-caption mt-4 text-center text-sm text-theme-secondary" aria-live="polite">
                {move || {
                    if status.get().is_static() {
                        STATIC_CAPTION
                    } else {
                        state.with(|s| step_caption(s.current_step))
                    }
                }}
            </p>
        </div>
    }
}

#[component]
fn MockScreen(props: Memo<SlideProps>) -> impl IntoView {
    view! {
        <div
            class="discover-screen rounded-2xl border border-theme bg-theme-secondary/30 overflow-hidden"
            style:opacity=move || format!("{:.2}", props.get().opacity)
        >
            // Search bar
            <div class="flex items-center gap-3 p-4 border-b border-theme">
                <span class="discover-location px-3 py-1 rounded-full text-sm font-medium">
                    "Medellín"
                </span>
                <div class="discover-search flex-1 px-3 py-2 rounded-lg text-sm">
                    <span>{move || props.get().search_text}</span>
                    <Show when=move || props.get().show_caret>
                        <span class="discover-caret">"|"</span>
                    </Show>
                    <Show when=move || props.get().search_text.is_empty()>
                        <span class="text-theme-tertiary">"Search experiences"</span>
                    </Show>
                </div>
            </div>

            // Filter chips
            <div class="flex gap-2 px-4 py-3">
                {FILTERS
                    .into_iter()
                    .map(|label| {
                        let class = move || {
                            let props = props.get();
                            if label == props.filter_label {
                                props.filter_class()
                            } else {
                                "discover-chip"
                            }
                        };
                        view! { <span class=class>{label}</span> }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-5 gap-4 p-4">
                // Results
                <ul class="col-span-2 space-y-3">
                    {RESULTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, area, price))| {
                            let class = move || {
                                if i == 0 { props.get().card_class() } else { "discover-card" }
                            };
                            view! {
                                <li class=class>
                                    <p class="text-sm font-semibold">{title}</p>
                                    <p class="text-xs text-theme-secondary">{area} " · " {price}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                // Map and insight
                <div class="col-span-3 relative">
                    <div class=move || props.get().map_class()>
                        <span class="discover-pin" style="left: 62%; top: 38%;"></span>
                        <span class="discover-pin" style="left: 35%; top: 55%;"></span>
                        <span class="discover-pin" style="left: 48%; top: 72%;"></span>
                    </div>
                    <div class=move || props.get().insight_class()>
                        <p class="text-xs font-semibold uppercase tracking-wide">"Scout insight"</p>
                        <p class="text-sm">"Go before 10am: the farm tours sell out by noon on weekends."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Steps as shown in the slide caption
pub fn step_caption(step: Option<StepName>) -> &'static str {
    match step {
        Some(StepName::Location) => "Pick where you are",
        Some(StepName::Search) => "Search what you love",
        Some(StepName::Filter) => "Narrow it down",
        Some(StepName::Result) => "Find the one",
        Some(StepName::Map) => "See it on the map",
        Some(StepName::Insight) => "Get local insight",
        Some(StepName::Reset) | None => "",
    }
}
