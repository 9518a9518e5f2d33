use leptos::{either::Either, prelude::*};

use super::{hero::SocialLinks, motion::Reveal};
use crate::{
    motion::card_delay,
    profile::{build_year, Accent, Icon, Profile},
    sections::SectionId,
};

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    let contact = &profile.contact;
    view! {
        <section id=SectionId::Contact.as_str() class="py-16 px-6 bg-white">
            <div class="container mx-auto max-w-6xl">
                <Reveal>
                    <h2 class="text-3xl font-bold text-center text-slate-800 mb-12">
                        {contact.heading.clone()}
                    </h2>
                    <div class="max-w-4xl mx-auto">
                        <Reveal effect="reveal-zoom" delay=0.2>
                            <div class="rounded-xl shadow-2xl overflow-hidden bg-white">
                                <div class="bg-gradient-to-r from-blue-600 to-purple-600 p-8 text-white text-center">
                                    <h3 class="text-2xl font-bold mb-4">{contact.headline.clone()}</h3>
                                    <p class="text-blue-100">{contact.blurb.clone()}</p>
                                </div>
                                <div class="p-8">
                                    <div class="grid md:grid-cols-2 gap-6">
                                        <ContactItem
                                            index=0
                                            icon=Icon::Mail
                                            label="Email"
                                            accent=Accent::Blue
                                            href=profile.mailto()
                                        >
                                            {profile.email.clone()}
                                        </ContactItem>
                                        <ContactItem
                                            index=1
                                            icon=Icon::Phone
                                            label="Phone"
                                            accent=Accent::Green
                                            href=profile.tel()
                                        >
                                            {profile.phone.clone()}
                                        </ContactItem>
                                        <ContactItem
                                            index=2
                                            icon=Icon::Map
                                            label="Location"
                                            accent=Accent::Blue
                                        >
                                            {profile.address.clone()}
                                        </ContactItem>
                                        <ContactItem
                                            index=3
                                            icon=Icon::ExternalLink
                                            label="Social Profiles"
                                            accent=Accent::Purple
                                        >
                                            <div class="flex space-x-2 mt-1">
                                                <SocialLinks links=&contact.socials compact=true />
                                            </div>
                                        </ContactItem>
                                    </div>
                                    <div class="text-center mt-8">
                                        <a
                                            href=profile.mailto()
                                            class="group inline-flex items-center rounded-md bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 text-lg transition-transform hover:scale-105 active:scale-95"
                                        >
                                            <i class=format!("{} mr-2 group-hover:animate-pulse", Icon::Mail.class())></i>
                                            "Start a Conversation"
                                            <i class=format!(
                                                "{} ml-2 transition-transform group-hover:translate-x-1",
                                                Icon::ArrowRight.class(),
                                            )></i>
                                        </a>
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(
    index: usize,
    icon: Icon,
    label: &'static str,
    accent: Accent,
    #[prop(optional, into)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let body = match href {
        Some(href) => Either::Left(view! {
            <a href=href class="text-slate-600 group-hover:text-slate-800 transition-colors break-all">
                {children()}
            </a>
        }),
        None => Either::Right(view! {
            <div class="text-slate-600 group-hover:text-slate-800 transition-colors">
                {children()}
            </div>
        }),
    };
    view! {
        <Reveal effect="reveal-left" delay=card_delay(index)>
            <div class=format!(
                "group flex items-center p-4 rounded-xl transition-all duration-300 hover:scale-[1.02] {}",
                accent.tint(),
            )>
                <div class=format!(
                    "h-12 w-12 rounded-xl flex items-center justify-center mr-4 shrink-0 transition-transform group-hover:scale-110 {}",
                    accent.solid(),
                )>
                    <i class=format!("{} text-2xl text-white", icon.class())></i>
                </div>
                <div>
                    <p class="font-semibold text-slate-800">{label}</p>
                    {body}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", profile.name),
        None => format!("© {}. All rights reserved.", profile.name),
    };
    view! {
        <footer class="bg-gradient-to-r from-slate-800 to-slate-900 text-white py-12 px-6">
            <div class="container mx-auto max-w-6xl">
                <Reveal class="text-center">
                    <h3 class="text-xl font-bold mb-2">{profile.name.clone()}</h3>
                    <p class="text-slate-400 mb-4">{profile.headline.clone()}</p>
                    <p class="text-slate-500 text-sm">{copyright} " Built with passion for quality."</p>
                </Reveal>
            </div>
        </footer>
    }
}
