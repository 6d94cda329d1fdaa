use leptos::prelude::*;

const ITEMS: [(&str, &str, &str); 5] = [
    ("📊", "Utilization", "Optimize equipment usage and space allocation"),
    ("👁", "Clarity", "Clear insights into gym operations and performance"),
    ("⚡", "Efficiency", "Streamlined processes and reduced wait times"),
    ("😊", "Happy Gym Visitors", "Enhanced member experience and satisfaction"),
    ("📈", "Analytic Decision Making", "Data-driven insights for better gym management"),
];

#[component]
pub fn KeyInfo() -> impl IntoView {
    view! {
        <section class="key-info">
            <div class="container key-info-grid">
                {ITEMS
                    .iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="key-info-card">
                                <div class="key-info-head">
                                    <span class="key-info-icon" aria-hidden="true">{*icon}</span>
                                    <h3 class="key-info-title">{*title}</h3>
                                </div>
                                <p class="key-info-description">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
