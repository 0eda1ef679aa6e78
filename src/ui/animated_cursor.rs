//! Simulated mouse cursor for the Discover slide

use leptos::prelude::*;

use crate::core::CursorFrame;

/// Cursor arrow with a name tag, positioned by a [`CursorFrame`]
///
/// Position changes are applied through a CSS transform; the short transition
/// on the element smooths frame-to-frame steps and the click pulse.
#[component]
pub fn AnimatedCursor(
    #[prop(into)] frame: Signal<CursorFrame>,
    #[prop(default = "#f97316")] color: &'static str,
    #[prop(default = "You")] label: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="discover-cursor absolute top-0 left-0 pointer-events-none z-20"
            style:transform=move || frame.get().transform()
            style:opacity=move || if frame.get().visible { "1" } else { "0" }
            aria-hidden="true"
        >
            <svg
                class="w-5 h-5 drop-shadow-lg"
                viewBox="0 0 24 24"
                fill=color
            >
                <path d="M5.5 3.21V20.8c0 .45.54.67.85.35l4.86-4.86a.5.5 0 0 1 .35-.15h6.87c.48 0 .72-.58.38-.92L6.35 2.85a.5.5 0 0 0-.85.36Z"/>
            </svg>
            <div
                class="absolute left-4 top-4 px-2 py-0.5 rounded text-xs font-medium text-white whitespace-nowrap shadow-md"
                style=format!("background-color: {};", color)
            >
                {label}
            </div>
        </div>
    }
}
