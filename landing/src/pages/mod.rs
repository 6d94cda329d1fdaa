// Landing page routes
// Developed by the Availio Team (c)2025

mod about;
mod contact;
mod features;
mod home;
mod imprint;
mod not_found;
mod pricing;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use imprint::ImprintPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;

use leptos::prelude::*;

/// Title block shared by the inner pages.
#[component]
fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">{title}</h1>
                <p class="page-description">{description}</p>
            </div>
        </section>
    }
}
