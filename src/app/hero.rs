use leptos::prelude::*;

use super::{image::FallbackImage, tracker::jump_to};
use crate::{
    motion::{delay_style, hero, parallax_offset},
    profile::{Icon, Profile, SocialLink},
    sections::SectionId,
};

#[component]
pub fn Hero(profile: &'static Profile, progress: ReadSignal<f64>) -> impl IntoView {
    let download_name = profile
        .resume
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    view! {
        <section id=SectionId::Hero.as_str() class="pt-20 pb-16 px-6 relative overflow-hidden">
            <div
                class="absolute inset-0 opacity-10"
                style:transform=move || {
                    format!("translateY({:.2}%)", parallax_offset(progress.get()))
                }
            >
                <div class="absolute top-20 left-10 w-72 h-72 bg-blue-500 rounded-full blur-3xl"></div>
                <div class="absolute bottom-20 right-10 w-96 h-96 bg-purple-500 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto max-w-6xl relative z-10">
                <div class="text-center animate-fade-up">
                    <ProfilePhoto name=profile.name.clone() src=profile.photo.clone() />

                    <h1
                        class="text-5xl md:text-6xl font-bold text-slate-800 mb-4 animate-fade-up"
                        style=delay_style(hero::NAME)
                    >
                        {profile.name.clone()}
                    </h1>

                    <div class="relative inline-block animate-fade-up" style=delay_style(hero::HEADLINE)>
                        <h2 class="text-2xl md:text-3xl text-blue-600 mb-6 font-medium">
                            {profile.headline.clone()}
                        </h2>
                        <div class="absolute -top-2 -right-2 animate-wiggle">
                            <i class=format!("{} text-yellow-400 text-xl", Icon::Star.class())></i>
                        </div>
                    </div>

                    <p
                        class="text-lg text-slate-600 mb-8 max-w-3xl mx-auto leading-relaxed text-center animate-fade-up"
                        style=delay_style(hero::SUMMARY)
                    >
                        {profile.summary.clone()}
                    </p>

                    <div
                        class="flex flex-wrap justify-center gap-4 mb-8 animate-fade-up"
                        style=delay_style(hero::ACTIONS)
                    >
                        <a
                            href=profile.resume.clone()
                            download=download_name
                            target="_blank"
                            class="group flex items-center h-11 rounded-md px-8 bg-blue-600 hover:bg-blue-700 text-white transition-transform hover:scale-105 active:scale-95"
                        >
                            <i class=format!("{} mr-2 group-hover:animate-bounce", Icon::Download.class())></i>
                            "Download CV"
                        </a>
                        <a
                            href=SectionId::Contact.href()
                            on:click=jump_to(SectionId::Contact)
                            class="group flex items-center h-11 rounded-md px-8 border border-slate-300 bg-white hover:bg-slate-50 transition-transform hover:scale-105 active:scale-95"
                        >
                            <i class=format!("{} mr-2 group-hover:animate-pulse", Icon::Mail.class())></i>
                            "Get In Touch"
                            <i class=format!(
                                "{} ml-2 transition-transform group-hover:translate-x-1",
                                Icon::ArrowRight.class(),
                            )></i>
                        </a>
                    </div>

                    <div
                        class="flex justify-center space-x-6 animate-fade-up"
                        style=delay_style(hero::CONTACT_LINE)
                    >
                        <div class="flex items-center text-slate-600 transition-transform hover:scale-110 hover:-translate-y-0.5">
                            <i class=format!("{} mr-2 text-red-500", Icon::MapPin.class())></i>
                            <span>{profile.location.clone()}</span>
                        </div>
                        <a
                            href=profile.tel()
                            class="flex items-center text-slate-600 transition-transform hover:scale-110 hover:-translate-y-0.5"
                        >
                            <i class=format!("{} mr-2 text-green-500", Icon::Phone.class())></i>
                            <span>{profile.phone.clone()}</span>
                        </a>
                    </div>

                    <div
                        class="flex justify-center mt-6 space-x-4 animate-fade-up"
                        style=delay_style(hero::SOCIALS)
                    >
                        <SocialLinks links=&profile.socials />
                    </div>

                    <div class="text-center mt-12 animate-bob">
                        <a
                            href=SectionId::About.href()
                            on:click=jump_to(SectionId::About)
                            aria-label="Scroll to About"
                            class="text-slate-400 hover:text-blue-600 transition-colors text-3xl"
                        >
                            <i class=Icon::ChevronDown.class()></i>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfilePhoto(name: String, src: String) -> impl IntoView {
    view! {
        <div class="relative w-32 h-32 mx-auto mb-8 animate-spin-in">
            <div class="w-full h-full bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-white text-4xl font-bold relative overflow-hidden transition-transform hover:scale-110 hover:rotate-3">
                <FallbackImage
                    name
                    src
                    img_class="object-cover aspect-square w-full h-full"
                    badge_class="relative z-10"
                />
            </div>
            <div class="absolute -inset-2 border-2 border-blue-300 rounded-full animate-orbit"></div>
        </div>
    }
}

/// Round icon links to external profiles.
#[component]
pub fn SocialLinks(
    links: &'static [SocialLink],
    /// Smaller, square tiles for use inside cards.
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let shape = if compact {
        "p-1.5 rounded-md text-base hover:shadow-md"
    } else {
        "p-2 rounded-full text-xl hover:shadow-lg hover:scale-125 hover:rotate-3"
    };
    links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.kind.label()
                    class=format!(
                        "{} {} text-white flex items-center justify-center transition-all duration-300",
                        link.kind.background(),
                        shape,
                    )
                >
                    <i class=link.kind.icon_class()></i>
                </a>
            }
        })
        .collect_view()
}
