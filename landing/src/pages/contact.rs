// Contact page - demo request form
use std::time::Duration;

use super::PageHeader;
use crate::sections::{SUPPORT_EMAIL, SUPPORT_PHONE};
use availio::AvailioConfig;
use availio::forms::{ContactRequest, SubmitState};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Request a Demo"
            description="Experience Availio firsthand. Let's discuss how we can transform your gym operations."
        />
        <section class="contact">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p>
                        "Ready to revolutionize your fitness business? Fill out the form and our team "
                        "will reach out to schedule a personalized demo."
                    </p>
                    <ul class="contact-details">
                        <li>
                            <span class="contact-label">"Email"</span>
                            <a href=format!("mailto:{SUPPORT_EMAIL}") data-ga-event="contact_email">{SUPPORT_EMAIL}</a>
                        </li>
                        <li>
                            <span class="contact-label">"Phone"</span>
                            <a href="tel:+1234567890" data-ga-event="contact_phone">{SUPPORT_PHONE}</a>
                        </li>
                        <li>
                            <span class="contact-label">"Location"</span>
                            <span>"Dornbirn, Austria"</span>
                        </li>
                    </ul>
                </div>
                <DemoRequestForm />
            </div>
        </section>
    }
}

type FieldGet = fn(&ContactRequest) -> &String;
type FieldSet = fn(&mut ContactRequest, String);

/// Value getter and input handler for one text field. Editing clears a
/// shown validation error.
fn bind_field(
    request: ReadSignal<ContactRequest>,
    set_request: WriteSignal<ContactRequest>,
    state: ReadSignal<SubmitState>,
    set_state: WriteSignal<SubmitState>,
    get: FieldGet,
    set: FieldSet,
) -> (impl Fn() -> String + Copy + Send + Sync + 'static, impl Fn(web_sys::Event) + Copy + Send + Sync + 'static) {
    let value = move || request.with(|r| get(r).clone());
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_request.update(|r| set(r, value));
        if state.get_untracked() == SubmitState::Error {
            set_state.set(SubmitState::Idle);
        }
    };
    (value, on_input)
}

#[component]
fn DemoRequestForm() -> impl IntoView {
    let delay = Duration::from_millis(expect_context::<AvailioConfig>().forms.contact_delay_ms);
    let (request, set_request) = signal(ContactRequest::default());
    let (state, set_state) = signal(SubmitState::Idle);
    let (problem, set_problem) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().is_busy() {
            return;
        }
        if let Err(e) = request.with_untracked(ContactRequest::validate) {
            tracing::debug!("demo request rejected: {e}");
            set_problem.set(e.to_string());
            set_state.set(SubmitState::Error);
            return;
        }
        set_state.set(SubmitState::Submitting);
        set_timeout(
            move || {
                set_state.set(SubmitState::Success);
                tracing::info!("demo request sent");
            },
            delay,
        );
    };

    let reset = move |_| {
        set_request.set(ContactRequest::default());
        set_state.set(SubmitState::Idle);
    };

    let bind = |get: FieldGet, set: FieldSet| bind_field(request, set_request, state, set_state, get, set);
    let (first_name, on_first_name) = bind(|r| &r.first_name, |r, v| r.first_name = v);
    let (last_name, on_last_name) = bind(|r| &r.last_name, |r, v| r.last_name = v);
    let (email, on_email) = bind(|r| &r.email, |r, v| r.email = v);
    let (company, on_company) = bind(|r| &r.company, |r, v| r.company = v);
    let (message, on_message) = bind(|r| &r.message, |r, v| r.message = v);

    view! {
        <div class="contact-card">
            <Show
                when=move || state.get() != SubmitState::Success
                fallback=move || view! {
                    <div class="contact-success">
                        <h3>"Thank You!"</h3>
                        <p>"We've received your request and will get back to you within 24 hours."</p>
                        <button class="btn btn-secondary" on:click=reset>"Send Another Message"</button>
                    </div>
                }
            >
                <form class="contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <label for="firstName">"First Name"</label>
                        <input id="firstName" name="firstName" type="text" required placeholder="John"
                            prop:value=first_name on:input=on_first_name />
                        <label for="lastName">"Last Name"</label>
                        <input id="lastName" name="lastName" type="text" required placeholder="Doe"
                            prop:value=last_name on:input=on_last_name />
                    </div>
                    <label for="email">"Email"</label>
                    <input id="email" name="email" type="email" required placeholder="john@example.com"
                        aria-invalid=move || (state.get() == SubmitState::Error).to_string()
                        prop:value=email on:input=on_email />
                    <label for="company">"Company / Gym Name"</label>
                    <input id="company" name="company" type="text" required placeholder="Your Gym Name"
                        prop:value=company on:input=on_company />
                    <label for="message">"Message"</label>
                    <textarea id="message" name="message" rows="5" required
                        placeholder="Tell us about your gym and what you're looking for..."
                        prop:value=message on:input=on_message></textarea>
                    <Show when=move || state.get() == SubmitState::Error>
                        <p class="status-error" aria-live="polite">{move || problem.get()}</p>
                    </Show>
                    <button type="submit" class="btn btn-primary" prop:disabled=move || state.get().is_busy()>
                        {move || if state.get().is_busy() { "Sending..." } else { "Request Demo" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
