// Home page - showcase hero + highlights
use crate::sections::{KeyInfo, PricingPlans, Showcase, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Showcase />
        <KeyInfo />
        <PricingPlans />
        <Testimonials />
    }
}
