use leptos::prelude::*;

use super::motion::Reveal;
use crate::{
    motion::card_delay,
    profile::{Highlight, Profile},
    sections::SectionId,
};

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    let about = &profile.about;
    view! {
        <section id=SectionId::About.as_str() class="py-16 px-6 bg-white relative">
            <div class="container mx-auto max-w-6xl">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center text-slate-800 mb-12">"About Me"</h2>
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <Reveal effect="reveal-left" delay=0.2>
                            <h3 class="text-2xl font-semibold text-slate-800 mb-4">
                                {about.heading.clone()}
                            </h3>
                            {about
                                .paragraphs
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-slate-600 leading-relaxed mb-6 last:mb-0">
                                            {p.clone()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                        <div class="grid grid-cols-2 gap-6">
                            {about
                                .highlights
                                .iter()
                                .enumerate()
                                .map(|(i, item)| view! { <HighlightCard item index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn HighlightCard(item: &'static Highlight, index: usize) -> impl IntoView {
    view! {
        <Reveal delay=card_delay(index) class="h-full">
            <div class="h-full rounded-xl bg-white p-6 text-center shadow-lg hover:shadow-xl hover:scale-105 hover:-translate-y-1 transition-all duration-300">
                <div class=format!(
                    "h-12 w-12 mx-auto mb-3 rounded-full flex items-center justify-center transition-transform hover:rotate-[360deg] duration-500 {}",
                    item.accent.soft(),
                )>
                    <i class=format!("{} text-2xl {}", item.icon.class(), item.accent.text())></i>
                </div>
                <h4 class="font-semibold text-slate-800 text-lg">{item.value.clone()}</h4>
                <p class="text-sm text-slate-600">{item.label.clone()}</p>
            </div>
        </Reveal>
    }
}
