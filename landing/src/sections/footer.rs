use std::time::Duration;

use availio::AvailioConfig;
use availio::forms::{NewsletterForm, SubmitState};
use leptos::prelude::*;

use super::{SUPPORT_EMAIL, SUPPORT_PHONE};

const COLUMNS: [(&str, [(&str, &str); 4]); 4] = [
    (
        "Product",
        [
            ("Features", "/features"),
            ("Pricing", "/pricing"),
            ("Changelog", "#"),
            ("Status", "/status"),
        ],
    ),
    (
        "Company",
        [
            ("About", "/about"),
            ("Careers", "#"),
            ("Press", "#"),
            ("Contact", "/contact"),
        ],
    ),
    (
        "Resources",
        [
            ("Docs", "#"),
            ("Blog", "#"),
            ("Guides", "#"),
            ("Community", "#"),
        ],
    ),
    (
        "Legal",
        [
            ("Privacy", "/privacy"),
            ("Terms", "/terms"),
            ("Imprint", "/imprint"),
            ("DPA", "#"),
        ],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" role="contentinfo">
            <div class="container">
                <nav aria-label="Footer navigation" class="footer-columns">
                    {COLUMNS
                        .iter()
                        .map(|(title, links)| {
                            view! {
                                <div class="footer-column">
                                    <h3 class="footer-column-title">{*title}</h3>
                                    <ul>
                                        {links
                                            .iter()
                                            .map(|(label, href)| {
                                                view! {
                                                    <li>
                                                        <a href=*href class="footer-link">{*label}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="footer-meta">
                    <div class="footer-contact">
                        <span>"Dornbirn, Austria"</span>
                        <a href="tel:+1234567890" class="footer-link">{SUPPORT_PHONE}</a>
                        <a href=format!("mailto:{SUPPORT_EMAIL}") class="footer-link">{SUPPORT_EMAIL}</a>
                    </div>
                    <Newsletter />
                </div>

                <p class="footer-copyright">
                    {format!("© {} Availio Inc. All rights reserved.", current_year())}
                </p>
            </div>
        </footer>
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
fn Newsletter() -> impl IntoView {
    let delay = Duration::from_millis(expect_context::<AvailioConfig>().forms.newsletter_delay_ms);
    let (form, set_form) = signal(NewsletterForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        set_form.update(|form| accepted = form.submit().is_ok());
        if accepted {
            tracing::debug!("newsletter signup submitted");
            set_timeout(move || set_form.update(NewsletterForm::complete), delay);
        }
    };

    view! {
        <form class="newsletter" aria-label="Newsletter subscription" on:submit=on_submit>
            <label for="newsletter-email" class="newsletter-label">
                "Stay updated with our newsletter"
            </label>
            <div class="newsletter-row">
                <input
                    id="newsletter-email"
                    name="email"
                    type="email"
                    placeholder="you@company.com"
                    autocomplete="email"
                    aria-describedby="subscribe-hint"
                    aria-invalid=move || (form.with(NewsletterForm::state) == SubmitState::Error).to_string()
                    prop:value=move || form.with(|f| f.email().to_string())
                    on:input=move |ev| set_form.update(|f| f.on_input(event_target_value(&ev)))
                />
                <button
                    type="submit"
                    class="btn btn-secondary"
                    aria-label="Subscribe to newsletter"
                    prop:disabled=move || form.with(|f| f.state().is_busy())
                >
                    "→"
                </button>
            </div>
            <p id="subscribe-hint" class="newsletter-hint">
                "Join our monthly newsletter. No spam. Unsubscribe anytime."
            </p>
            <div class="newsletter-status" aria-live="polite" aria-atomic="true">
                {move || match form.with(NewsletterForm::state) {
                    SubmitState::Success => Some(view! {
                        <span class="status-success">"You're in! Please check your inbox to confirm."</span>
                    }.into_any()),
                    SubmitState::Error => Some(view! {
                        <span class="status-error">"Please enter a valid email address."</span>
                    }.into_any()),
                    SubmitState::Idle | SubmitState::Submitting => None,
                }}
            </div>
        </form>
    }
}
