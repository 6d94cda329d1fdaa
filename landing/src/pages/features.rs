// Features page - platform filter and the two platform summaries
use super::PageHeader;
use availio::catalog::{Feature, FeatureView, filter_features};
use leptos::prelude::*;

fn feature_card(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <span class=format!("feature-icon icon-{}", feature.icon) aria-hidden="true"></span>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
            <div class="feature-tags">
                {feature.dashboard.then(|| view! { <span class="feature-tag">"Dashboard"</span> })}
                {feature.mobile.then(|| view! { <span class="feature-tag">"Mobile"</span> })}
            </div>
        </div>
    }
}

#[component]
fn Platform(
    platform: FeatureView,
    title: &'static str,
    audience: &'static str,
    summary: &'static str,
) -> impl IntoView {
    view! {
        <div class="platform-card">
            <h3 class="platform-title">{title}</h3>
            <p class="platform-audience">{audience}</p>
            <p class="platform-summary">{summary}</p>
            <ul class="platform-features">
                {filter_features(platform)
                    .map(|f| view! { <li><strong>{f.title}</strong> " " {f.description}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let (active, set_active) = signal(FeatureView::default());

    view! {
        <PageHeader
            title="Powerful Features, Two Platforms"
            description="Everything gym owners and members need, from live equipment data to class booking"
        />
        <section class="features">
            <div class="container">
                <div class="feature-filter" role="tablist">
                    {FeatureView::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    role="tab"
                                    class=move || if active.get() == option { "toggle-btn active" } else { "toggle-btn" }
                                    aria-selected=move || (active.get() == option).to_string()
                                    on:click=move |_| set_active.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="feature-grid">
                    {move || filter_features(active.get()).map(feature_card).collect_view()}
                </div>
            </div>
        </section>
        <section class="platforms">
            <div class="container">
                <h2 class="section-title">"Two Powerful Platforms"</h2>
                <p class="section-description">
                    "Our dashboard and mobile app work together to create a seamless gym ecosystem for owners and members"
                </p>
                <div class="platform-grid">
                    <Platform
                        platform=FeatureView::Dashboard
                        title="Dashboard Platform"
                        audience="For Gym Owners & Staff"
                        summary="Complete gym management solution with powerful analytics and operational tools"
                    />
                    <Platform
                        platform=FeatureView::Mobile
                        title="Mobile App"
                        audience="For Gym Members"
                        summary="Your personal fitness companion with real-time gym insights and workout tracking"
                    />
                </div>
            </div>
        </section>
    }
}
