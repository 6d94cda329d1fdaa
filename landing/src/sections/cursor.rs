//! Decorative cursor that follows the pointer and grows over interactive
//! elements.

use availio::analytics::is_interactive_hover;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::browser::{BrowserElement, add_listener};

const HOVER_SCALE: f64 = 1.4;

#[component]
pub fn DecorativeCursor() -> impl IntoView {
    let (position, set_position) = signal((0, 0));
    let (hovering, set_hovering) = signal(false);
    let (visible, set_visible) = signal(false);

    Effect::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let on_move = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            set_position.set((event.client_x(), event.client_y()));
            set_visible.set(true);
        }) as Box<dyn FnMut(_)>);
        let on_over = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let interactive = BrowserElement::from_target(event.target()).is_some_and(is_interactive_hover);
            set_hovering.set(interactive);
        }) as Box<dyn FnMut(_)>);
        let on_leave = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            set_visible.set(false);
        }) as Box<dyn FnMut(_)>);

        add_listener(&document, "mousemove", on_move.as_ref().unchecked_ref());
        add_listener(&document, "mouseover", on_over.as_ref().unchecked_ref());
        if let Some(html) = document.document_element() {
            add_listener(&html, "mouseleave", on_leave.as_ref().unchecked_ref());
        }

        // Mounted once for the whole app
        on_move.forget();
        on_over.forget();
        on_leave.forget();
    });

    let transform = move || {
        let (x, y) = position.get();
        let scale = if hovering.get() { HOVER_SCALE } else { 1.0 };
        format!("translate3d({x}px, {y}px, 0) translate(-50%, -50%) scale({scale})")
    };

    view! {
        <div
            class="cursor"
            class:cursor-hover=move || hovering.get()
            class:cursor-hidden=move || !visible.get()
            style:transform=transform
            aria-hidden="true"
        >
            <div class="cursor-ring"></div>
            <div class="cursor-dot"></div>
        </div>
    }
}
