use leptos::prelude::*;

use super::{image::FallbackImage, motion::Reveal};
use crate::{
    motion::{card_delay, delay_style, tool_delay},
    profile::{Profile, ToolCategory},
    sections::SectionId,
};

#[component]
pub fn Skills(profile: &'static Profile) -> impl IntoView {
    view! {
        <section
            id=SectionId::Skills.as_str()
            class="py-16 px-6 bg-gradient-to-br from-slate-50 to-blue-50 relative"
        >
            <div class="container mx-auto max-w-6xl">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center text-slate-800 mb-4">"Skills & Tools"</h2>
                    <p class="text-center text-slate-600 mb-12 max-w-2xl mx-auto">
                        {profile.skills_tagline.clone()}
                    </p>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {profile
                            .tool_categories
                            .iter()
                            .enumerate()
                            .map(|(i, category)| view! { <CategoryCard category index=i /> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static ToolCategory, index: usize) -> impl IntoView {
    view! {
        <Reveal delay=card_delay(index) class="group h-full">
            <div class="h-full rounded-xl bg-white shadow-lg hover:shadow-2xl hover:scale-[1.02] hover:-translate-y-2 transition-all duration-500">
                <div class="text-center p-6 pb-4">
                    <div class=format!(
                        "w-16 h-16 mx-auto mb-4 rounded-2xl bg-gradient-to-br flex items-center justify-center shadow-lg transition-transform hover:rotate-[360deg] hover:scale-110 duration-700 {}",
                        category.accent.gradient(),
                    )>
                        <i class=format!("{} text-3xl text-white", category.icon.class())></i>
                    </div>
                    <h3 class="text-lg font-semibold text-slate-800">{category.title.clone()}</h3>
                </div>
                <div class="px-6 pb-6">
                    <div class="grid grid-cols-2 gap-3">
                        {category
                            .tools
                            .iter()
                            .enumerate()
                            .map(|(tool_index, tool)| {
                                view! {
                                    <div
                                        class="group/tool flex flex-col items-center p-3 bg-white rounded-lg shadow-sm hover:shadow-md hover:scale-105 hover:-translate-y-0.5 transition-all duration-300 stagger animate-pop-in"
                                        style=delay_style(tool_delay(index, tool_index))
                                    >
                                        <div class="w-10 h-10 mb-2 rounded-lg bg-gradient-to-br from-gray-100 to-gray-200 flex items-center justify-center overflow-hidden transition-transform group-hover/tool:rotate-6">
                                            <FallbackImage
                                                name=tool.name.clone()
                                                src=tool.logo.clone()
                                                img_class="w-6 h-6 object-contain"
                                                badge_class="w-6 h-6 bg-gradient-to-br from-blue-400 to-purple-500 rounded text-white text-xs flex items-center justify-center font-bold"
                                            />
                                        </div>
                                        <span class="text-xs font-medium text-slate-700 text-center leading-tight group-hover/tool:text-blue-600 transition-colors">
                                            {tool.name.clone()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
