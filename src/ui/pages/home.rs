//! Home page component
//!
//! Marketing landing for Local Scout:
//! - SEO meta tags
//! - Hero section
//! - Discover demo slide (animated, static with reduced motion)
//! - Concierge chat
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::concierge_panel::ConciergePanel;
use crate::ui::discover_slide::DiscoverSlide;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            // Hero Section
            <section class="flex items-center justify-center pt-24 pb-12 px-4">
                <div class="text-center max-w-3xl mx-auto">
                    <p class="text-sm font-semibold uppercase tracking-widest text-accent-primary mb-4">
                        "I Love Medellín"
                    </p>
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "Travel like you live here"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-2xl mx-auto leading-relaxed">
                        "Local Scout finds the coffee farms, hikes and hidden spots locals actually go to, and plans your days around them."
                    </p>
                </div>
            </section>

            // Discover demo
            <section class="py-12 px-4" aria-label="Discover demo">
                <DiscoverSlide />
            </section>

            // Concierge
            <section class="py-16 px-4 bg-theme-secondary/20">
                <div class="text-center mb-10">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Your concierge, on call"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Ask anything about the city. Your scout answers with places, times and routes."
                    </p>
                </div>
                <ConciergePanel />
            </section>

            <Footer />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Local Scout - Discover Medellín like a local" />
        <Meta
            name="description"
            content="Local Scout plans your Medellín trip: discover experiences, filter by what you love and get local insight on the map."
        />
        <Meta property="og:title" content="Local Scout" />
        <Meta property="og:type" content="website" />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-theme">
            <p class="text-center text-sm text-theme-tertiary">"© 2025 Local Scout"</p>
        </footer>
    }
}
