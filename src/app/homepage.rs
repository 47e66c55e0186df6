use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactMeSection;
use super::projects::ProjectsSection;
use crate::site::{AVATAR_URL, BIO_LINES, GREETING, OWNER};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <LandingSection />
        <ProjectsSection />
        <ContactMeSection />
    }
}

/// Viewport-height band with a solid background.
#[component]
pub fn FullScreenSection(
    children: Children,
    /// Tailwind background class.
    background: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <section class=format!("w-full text-white {background}")>
            <div class=format!("flex flex-col max-w-7xl min-h-screen mx-auto {class}")>
                {children()}
            </div>
        </section>
    }
}

#[component]
fn LandingSection() -> impl IntoView {
    view! {
        <FullScreenSection background="bg-[#2A4365]" class="justify-center items-center">
            <div id="landing-section" class="flex flex-col gap-4 items-center">
                <img
                    src=AVATAR_URL
                    alt=OWNER
                    class="w-32 h-32 rounded-full object-cover shadow-lg"
                />
                <h2 class="text-sm font-bold text-center">{GREETING}</h2>
                {BIO_LINES
                    .iter()
                    .map(|line| view! { <h1 class="text-3xl font-bold text-center">{*line}</h1> })
                    .collect_view()}
            </div>
        </FullScreenSection>
    }
}
