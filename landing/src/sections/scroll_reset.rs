use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Scrolls every scroll container back to the top when the path changes.
#[component]
#[allow(clippy::unused_unit)]
pub fn ScrollReset() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move || {
        pathname.track();
        let Some(window) = web_sys::window() else {
            return;
        };
        window.scroll_to_with_x_and_y(0.0, 0.0);
        let Some(document) = window.document() else {
            return;
        };
        if let Some(root) = document.get_element_by_id("root") {
            root.set_scroll_top(0);
        }
        if let Some(html) = document.document_element() {
            html.set_scroll_top(0);
        }
        if let Some(body) = document.body() {
            body.set_scroll_top(0);
        }
    });

    view! {}
}
