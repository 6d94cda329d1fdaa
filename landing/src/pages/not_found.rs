use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-header not-found">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">"This page took a rest day."</p>
                <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </section>
    }
}
