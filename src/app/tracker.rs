use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{
    motion::scroll_progress,
    sections::{ActiveSectionTracker, SectionGeometry, SectionId, SectionLayout},
};

/// Section geometry read straight from the rendered document.
struct DocumentLayout(Document);

impl SectionLayout for DocumentLayout {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        let el = self
            .0
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionGeometry::new(
            el.offset_top().into(),
            el.offset_height().into(),
        ))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollTracking {
    pub active: ReadSignal<SectionId>,
    pub progress: ReadSignal<f64>,
}

/// Tracks the active section and the scroll progress for the page that
/// calls it. Listeners go away with the calling component.
pub fn use_scroll_tracking() -> ScrollTracking {
    let tracker = StoredValue::new(ActiveSectionTracker::new());
    let (active, set_active) = signal(SectionId::default());
    let (progress, set_progress) = signal(0.0);

    let on_scroll = move || {
        let window = window();
        let Ok(scroll_y) = window.scroll_y() else {
            return;
        };
        let document = document();

        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let height = document
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default();
        set_progress.set(scroll_progress(scroll_y, height, viewport));

        let layout = DocumentLayout(document);
        tracker.update_value(|t| {
            t.update(scroll_y, &layout);
        });
        let next = tracker.with_value(|t| t.active());
        if next != active.get_untracked() {
            log::debug!("active section: {next}");
            set_active.set(next);
        }
    };

    // once at mount, then on every scroll event
    Effect::new(move |_| on_scroll());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());

    ScrollTracking { active, progress }
}

/// Smoothly scrolls the section's top edge to the top of the viewport.
pub fn scroll_to_section(id: SectionId) {
    let Some(el) = document().get_element_by_id(id.as_str()) else {
        log::debug!("section not rendered: {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scrolls to the section named by the URL fragment, if any. The browser's
/// own fragment jump ran while only the splash was on screen.
pub fn use_fragment_jump() {
    Effect::new(move |_| {
        let Ok(hash) = window().location().hash() else {
            return;
        };
        if hash.is_empty() {
            return;
        }
        match hash.parse::<SectionId>() {
            Ok(id) => scroll_to_section(id),
            Err(e) => log::debug!("ignoring fragment: {e}"),
        }
    });
}

/// Click handler for in-page links: keeps the `#id` href for no-JS use but
/// scrolls smoothly once hydrated.
pub fn jump_to(id: SectionId) -> impl Fn(ev::MouseEvent) + Clone + Send + Sync + 'static {
    move |ev: ev::MouseEvent| {
        ev.prevent_default();
        scroll_to_section(id);
    }
}
