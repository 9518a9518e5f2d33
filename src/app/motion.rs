use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{delay_style, particles};

/// Plays `effect` the first time the wrapped block scrolls into view and
/// leaves it in its final state afterwards.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    #[prop(default = "reveal-up")] effect: &'static str,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !shown.get_untracked() {
            set_shown.set(true);
        }
    });

    let classes = move || {
        if shown.get() {
            format!("{class} {effect} revealed")
        } else {
            format!("{class} {effect}")
        }
    };

    view! {
        <div node_ref=target class=classes style=delay_style(delay)>
            {children()}
        </div>
    }
}

#[component]
pub fn FloatingParticles() -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {particles()
                .map(|p| {
                    view! {
                        <div
                            class="particle absolute w-2 h-2 bg-blue-400/20 rounded-full"
                            style=p.style()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
