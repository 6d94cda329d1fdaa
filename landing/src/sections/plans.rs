use availio::catalog::{Plan, PlanAudience, plans_for};
use leptos::prelude::*;

fn plan_card(plan: &'static Plan) -> impl IntoView {
    let cta = if plan.cta == "Contact Sales" {
        view! { <a href="/contact" class="btn btn-primary plan-cta">{plan.cta}</a> }.into_any()
    } else {
        view! { <button class="btn btn-primary plan-cta">{plan.cta}</button> }.into_any()
    };

    view! {
        <div class="plan-card" class:featured=plan.badge.is_some()>
            {plan.badge.map(|badge| view! { <span class="plan-badge">{badge}</span> })}
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-tagline">{plan.tagline}</p>
            <div class="plan-price">
                <span class="plan-amount">{plan.price}</span>
                <span class="plan-period">{plan.period}</span>
            </div>
            <ul class="plan-features">
                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            {cta}
            {plan.note.map(|note| view! { <p class="plan-note">{note}</p> })}
        </div>
    }
}

/// Audience toggle plus the matching plan cards.
#[component]
pub fn PricingPlans() -> impl IntoView {
    let (audience, set_audience) = signal(PlanAudience::default());

    view! {
        <section class="pricing">
            <div class="container">
                <div class="pricing-toggle" role="tablist">
                    {[PlanAudience::Gyms, PlanAudience::Members]
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    role="tab"
                                    class=move || if audience.get() == option { "toggle-btn active" } else { "toggle-btn" }
                                    aria-selected=move || (audience.get() == option).to_string()
                                    on:click=move |_| set_audience.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="plan-grid">
                    {move || plans_for(audience.get()).iter().map(plan_card).collect_view()}
                </div>
            </div>
        </section>
    }
}
