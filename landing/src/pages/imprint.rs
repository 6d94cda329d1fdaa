// Imprint page - legal information
use super::PageHeader;
use crate::sections::{SUPPORT_EMAIL, SUPPORT_PHONE};
use leptos::prelude::*;

/// `(label, value, link)`
type Entry = (&'static str, &'static str, Option<&'static str>);

static SECTIONS: [(&str, &[Entry]); 3] = [
    (
        "Company Information",
        &[
            ("Company Name", "Availio Inc.", None),
            ("Address", "Dornbirn, Austria", None),
            ("Registration Number", "FN 123456 a", None),
        ],
    ),
    (
        "Contact Details",
        &[
            ("Email", SUPPORT_EMAIL, Some("mailto:support@availio.com")),
            ("Phone", SUPPORT_PHONE, Some("tel:+1234567890")),
        ],
    ),
    (
        "Legal Representatives",
        &[
            ("Managing Director", "John Doe", None),
            ("Commercial Register", "Handelsgericht Wien", None),
        ],
    ),
];

#[component]
pub fn ImprintPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Imprint"
            description="Legal information and contact details in accordance with legal requirements"
        />
        <section class="imprint">
            <div class="container">
                {SECTIONS
                    .iter()
                    .map(|(title, entries)| {
                        view! {
                            <div class="imprint-card">
                                <h2 class="imprint-title">{*title}</h2>
                                {entries
                                    .iter()
                                    .map(|(label, value, link)| {
                                        let value = match link {
                                            Some(href) => view! { <a href=*href>{*value}</a> }.into_any(),
                                            None => view! { <span>{*value}</span> }.into_any(),
                                        };
                                        view! {
                                            <div class="imprint-row">
                                                <span class="imprint-label">{*label}</span>
                                                {value}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="imprint-card disclaimer">
                    <h3>"Disclaimer"</h3>
                    <p>
                        "The content of this website has been compiled with meticulous care and to the best of our knowledge. "
                        "However, we cannot assume any liability for the up-to-dateness, completeness or accuracy of any of the pages."
                    </p>
                    <p>
                        "All offers are non-binding and subject to change. We reserve the right to make changes, additions, "
                        "or deletions to the information without prior notice."
                    </p>
                </div>
            </div>
        </section>
    }
}
