#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod gate;
pub mod logo;
pub mod motion;
pub mod profile;
pub mod sections;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(App);
}
