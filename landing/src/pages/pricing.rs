// Pricing page - audience toggle and plans
use super::PageHeader;
use crate::sections::PricingPlans;
use leptos::prelude::*;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Choose Your Plan"
            description="Whether you're running a gym or visiting one, we have the perfect solution for you"
        />
        <PricingPlans />
    }
}
