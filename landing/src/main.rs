// Availio Landing Page - Leptos 0.8 Edition
// Developed by the Availio Team (c)2025

mod analytics;
mod browser;
mod pages;
mod sections;

use availio::AvailioConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::*;

/// Site configuration, embedded at build time.
const CONFIG_TOML: &str = include_str!("../availio.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AvailioConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (AvailioConfig::default(), Some(e)),
    };
    browser::init_logging(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("{e}; falling back to defaults");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "availio landing starting");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: AvailioConfig) -> impl IntoView {
    analytics::provide_recorder(&config.analytics);
    provide_context(config);

    view! {
        <Router>
            <ScrollReset />
            <analytics::PageViews />
            <DecorativeCursor />
            <Header />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/features") view=FeaturesPage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/imprint") view=ImprintPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = AvailioConfig::from_toml_str(CONFIG_TOML).expect("embedded config parses");
        assert_eq!(config, AvailioConfig::default());
    }
}
