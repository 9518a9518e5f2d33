use leptos::prelude::*;

use super::motion::Reveal;
use crate::{
    motion::{
        achievement_bullet_delay, achievement_delay, card_delay, delay_style, stagger,
        timeline_dot_delay,
    },
    profile::{Education as School, Icon, Job, Profile},
    sections::SectionId,
};

#[component]
pub fn Experience(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-16 px-6 bg-white relative">
            <div class="container mx-auto max-w-6xl">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center text-slate-800 mb-12">
                        "Professional Journey"
                    </h2>
                    <div class="relative">
                        <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 to-purple-600"></div>
                        <div class="space-y-12">
                            {profile
                                .experience
                                .iter()
                                .enumerate()
                                .map(|(i, job)| view! { <JobCard job index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn JobCard(job: &'static Job, index: usize) -> impl IntoView {
    view! {
        <Reveal effect="reveal-left" delay=stagger(index, 0.2) class="relative pl-20">
            <div
                class=format!(
                    "absolute left-6 w-4 h-4 rounded-full border-4 border-white shadow-lg stagger animate-pop-in {}",
                    job.accent.solid(),
                )
                style=delay_style(timeline_dot_delay(index))
            ></div>
            <div class=format!(
                "rounded-xl bg-white border-l-4 shadow-lg hover:shadow-xl hover:scale-[1.02] transition-all duration-300 {}",
                job.accent.edge(),
            )>
                <div class="p-6 flex justify-between items-start gap-4">
                    <div>
                        <h3 class="text-xl font-semibold text-slate-800 flex items-center gap-2">
                            {job.title.clone()}
                            {job
                                .is_current()
                                .then(|| {
                                    view! {
                                        <span class="px-2 py-1 bg-green-100 text-green-700 text-xs rounded-full animate-pulse">
                                            "Current"
                                        </span>
                                    }
                                })}
                        </h3>
                        <p class=format!("text-lg font-medium {}", job.accent.text())>
                            {job.company.clone()}
                        </p>
                    </div>
                    <span class=format!(
                        "shrink-0 inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {}",
                        job.accent.outline(),
                    )>
                        <i class=format!("{} mr-1", Icon::Calendar.class())></i>
                        {job.period()}
                    </span>
                </div>
                <ul class="px-6 pb-6 space-y-3">
                    {job
                        .achievements
                        .iter()
                        .enumerate()
                        .map(|(item, achievement)| {
                            view! {
                                <li
                                    class="flex items-start text-slate-600 stagger animate-slide-in"
                                    style=delay_style(achievement_delay(index, item))
                                >
                                    <span
                                        class=format!(
                                            "w-2 h-2 rounded-full mt-2 mr-3 flex-shrink-0 stagger animate-pop-in {}",
                                            job.accent.solid(),
                                        )
                                        style=delay_style(achievement_bullet_delay(index, item))
                                    ></span>
                                    {achievement.trim().to_string()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Education(profile: &'static Profile) -> impl IntoView {
    view! {
        <section
            id=SectionId::Education.as_str()
            class="py-16 px-6 bg-gradient-to-br from-slate-50 to-blue-50"
        >
            <div class="container mx-auto max-w-6xl">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center text-slate-800 mb-12">"Education"</h2>
                    <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                        {profile
                            .education
                            .iter()
                            .enumerate()
                            .map(|(i, school)| view! { <SchoolCard school index=i /> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SchoolCard(school: &'static School, index: usize) -> impl IntoView {
    view! {
        <Reveal delay=card_delay(index * 2) class="h-full">
            <div class="h-full rounded-xl bg-white shadow-lg hover:shadow-xl hover:scale-105 hover:-translate-y-1 transition-all duration-300">
                <div class="p-6 text-center">
                    <div class=format!(
                        "w-16 h-16 mx-auto mb-4 rounded-2xl bg-gradient-to-br flex items-center justify-center shadow-lg transition-transform hover:rotate-[360deg] duration-700 {}",
                        school.accent.gradient(),
                    )>
                        <i class=format!("{} text-3xl text-white", school.icon.class())></i>
                    </div>
                    <h3 class="text-xl font-semibold text-slate-800">{school.degree.clone()}</h3>
                    <p class="text-lg font-medium text-slate-600">{school.institution.clone()}</p>
                </div>
                <div class="pb-6 flex justify-center">
                    <i class=format!("{} text-2xl text-yellow-500 animate-wiggle", Icon::Award.class())></i>
                </div>
            </div>
        </Reveal>
    }
}
