use leptos::prelude::*;

use super::tracker::jump_to;
use crate::{
    motion::{delay_style, nav_label_delay},
    sections::SectionId,
};

#[component]
pub fn NavBar(name: String, active: ReadSignal<SectionId>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-white/80 backdrop-blur-md border-b animate-slide-down">
            <div class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href=SectionId::Hero.href()
                        on:click=jump_to(SectionId::Hero)
                        class="text-xl font-bold text-slate-800 transition-transform hover:scale-105 animate-fade-in"
                    >
                        {name}
                    </a>
                    <div class="hidden md:flex space-x-8">
                        {SectionId::NAV
                            .into_iter()
                            .enumerate()
                            .map(|(index, id)| view! { <NavLabel id index active /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLabel(id: SectionId, index: usize, active: ReadSignal<SectionId>) -> impl IntoView {
    let is_active = move || active.get() == id;
    view! {
        <a
            href=id.href()
            on:click=jump_to(id)
            aria-current=move || is_active().then_some("location")
            style=delay_style(nav_label_delay(index))
            class=move || {
                if is_active() {
                    "nav-label relative text-sm font-medium text-blue-600 animate-drop-in"
                } else {
                    "nav-label relative text-sm font-medium text-slate-600 hover:text-blue-600 animate-drop-in"
                }
            }
        >
            {id.label()}
            <Show when=is_active>
                <span class="nav-underline absolute -bottom-1 left-0 right-0 h-0.5 bg-blue-600"></span>
            </Show>
        </a>
    }
}

/// Thin bar along the top edge that fills as the page scrolls.
#[component]
pub fn ProgressBar(progress: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-blue-600 to-purple-600 z-50 origin-left"
            style:transform=move || format!("scaleX({:.4})", progress.get())
        ></div>
    }
}
