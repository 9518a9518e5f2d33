use leptos::{either::Either, html, prelude::*};

use crate::logo::Logo;

/// An image that turns into a letter badge when it can't be loaded.
#[component]
pub fn FallbackImage(
    name: String,
    src: String,
    #[prop(into)] img_class: String,
    #[prop(into)] badge_class: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let img_ref = NodeRef::<html::Img>::new();

    // a cached broken image can already be complete with no pixels when
    // this mounts, before on:error is ever seen
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                set_failed.set(true);
            }
        }
    });

    move || match Logo::select(&name, &src, failed.get()) {
        Logo::Image(src) => {
            let name = name.clone();
            Either::Left(view! {
                <img
                    node_ref=img_ref
                    src=src
                    alt=name.clone()
                    class=img_class.clone()
                    on:error=move |_| {
                        log::warn!("image for {name} failed to load, showing badge");
                        set_failed.set(true);
                    }
                />
            })
        }
        Logo::InitialsBadge(letter) => Either::Right(view! {
            <div class=badge_class.clone() role="img" aria-label=name.clone()>
                {letter.to_string()}
            </div>
        }),
    }
}
