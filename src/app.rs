mod about;
mod contact;
mod hero;
mod image;
mod motion;
mod nav;
mod resume;
mod skills;
mod tracker;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    gate::LoadPhase,
    profile::{profile, Profile},
};

use about::About;
use contact::{Contact, Footer};
use hero::Hero;
use motion::FloatingParticles;
use nav::{NavBar, ProgressBar};
use resume::{Education, Experience};
use skills::Skills;
use tracker::{use_fragment_jump, use_scroll_tracking};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased text-slate-800">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match profile() {
        Ok(profile) => Either::Left(view! {
            <Title text=profile.name.clone() />
            <Meta name="description" content=profile.summary.clone() />
            <LoadingGate profile />
        }),
        Err(err) => {
            log::error!("profile content unavailable: {err}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <div class="min-h-screen flex items-center justify-center p-8 text-center">
                    <p class="text-slate-600">"This page couldn't be loaded. " {err.to_string()}</p>
                </div>
            })
        }
    }
}

/// Holds the page behind the splash until the splash timer fires.
#[component]
fn LoadingGate(profile: &'static Profile) -> impl IntoView {
    let (phase, set_phase) = signal(LoadPhase::default());
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            log::debug!("splash dismissed");
            set_phase.update(|p| *p = p.advance());
        },
        LoadPhase::delay_millis(),
    );
    start(());
    on_cleanup(stop);

    view! {
        <Show
            when=move || phase.get().is_ready()
            fallback=move || view! { <Splash profile /> }
        >
            <Portfolio profile />
        </Show>
    }
}

#[component]
fn Splash(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-gradient-to-br from-blue-600 to-purple-700 flex items-center justify-center z-50">
            <div class="text-center text-white animate-pop-in">
                <div class="w-20 h-20 border-4 border-white/30 border-t-white rounded-full mx-auto mb-4 animate-spin"></div>
                <h2 class="text-2xl font-bold animate-fade-in" style="animation-delay: 0.5s">
                    {profile.name.clone()}
                </h2>
                <p class="text-blue-200 animate-fade-in" style="animation-delay: 0.7s">
                    {profile.headline.clone()}
                </p>
            </div>
        </div>
    }
}

#[component]
fn Portfolio(profile: &'static Profile) -> impl IntoView {
    let scroll = use_scroll_tracking();
    use_fragment_jump();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 relative">
            <FloatingParticles />
            <ProgressBar progress=scroll.progress />
            <NavBar name=profile.name.clone() active=scroll.active />
            <main>
                <Hero profile progress=scroll.progress />
                <About profile />
                <Skills profile />
                <Experience profile />
                <Education profile />
                <Contact profile />
            </main>
            <Footer profile />
        </div>
    }
}
