use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/features", "Products"),
    ("/pricing", "Pricing"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav" role="banner" aria-label="Site header">
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <div class="nav-logo">
                        <img src="/assets/black_logo.svg" alt="" />
                    </div>
                    <span class="nav-title">"Availio"</span>
                </A>
                <nav aria-label="Primary" class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="nav-link" on:click=move |_| set_menu_open.set(false)>
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="nav-toggle"
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    data-ga-skip="true"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}
