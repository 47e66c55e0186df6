use leptos::{
    ev::{self, MouseEvent},
    prelude::*,
};

use crate::nav::{navigate_to_anchor, section_id, DocumentLocator};
use crate::scroll::{offset_from_viewport, ScrollState};
use crate::site::{NAV_LINKS, SOCIALS};

#[component]
pub fn Header() -> impl IntoView {
    let scroll = RwSignal::new(ScrollState::new());
    let is_visible = Memo::new(move |_| scroll.with(|s| s.is_visible()));

    let listener = window_event_listener(ev::scroll, move |_| {
        let raw = window().scroll_y().unwrap_or_default();
        let offset = offset_from_viewport(raw);
        scroll.update(|s| {
            s.on_scroll(offset);
        });
    });
    on_cleanup(move || listener.remove());

    let on_nav = move |ev: MouseEvent, anchor: &'static str| {
        ev.prevent_default();
        navigate_to_anchor(&DocumentLocator, anchor);
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-10 bg-[#18181b] transition-transform duration-300 ease-in-out {}",
                if is_visible.get() { "translate-y-0" } else { "-translate-y-[200px]" },
            )
        }>
            <div class="text-white max-w-7xl mx-auto">
                <div class="flex px-16 py-4 justify-between items-center">
                    <nav>
                        <div class="flex gap-3">
                            {SOCIALS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class="text-3xl hover:text-brightWhite"
                                        >
                                            <i class=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </nav>
                    <nav>
                        <div class="flex gap-8">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    let anchor = link.anchor;
                                    view! {
                                        <a
                                            href=format!("#{}", section_id(anchor))
                                            on:click=move |ev| on_nav(ev, anchor)
                                            class="hover:text-cyan transition-colors duration-200"
                                        >
                                            {link.text}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </nav>
                </div>
            </div>
        </header>
    }
}
