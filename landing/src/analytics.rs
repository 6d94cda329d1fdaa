//! Wires the interaction recorder into the app.

use availio::analytics::{InstallGuard, InteractionRecorder};
use availio::config::AnalyticsConfig;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::browser::{DataLayerSink, DocumentClicks, TagSink};

pub type Recorder = InteractionRecorder<DocumentClicks>;

/// Context handle to the app-wide recorder; `None` when analytics is off.
pub type RecorderContext = StoredValue<Option<Recorder>, LocalStorage>;

/// Build the recorder, register both sinks and install the click listener
/// for the lifetime of the calling owner.
pub fn provide_recorder(config: &AnalyticsConfig) {
    let recorder = build(config);
    if let Some(recorder) = &recorder {
        let guard: StoredValue<Option<InstallGuard<DocumentClicks>>, LocalStorage> =
            StoredValue::new_local(Some(recorder.install()));
        on_cleanup(move || {
            guard.try_update_value(|guard| guard.take());
        });
    }
    provide_context::<RecorderContext>(StoredValue::new_local(recorder));
}

fn build(config: &AnalyticsConfig) -> Option<Recorder> {
    if !config.enabled {
        tracing::info!("analytics disabled");
        return None;
    }
    let Some(clicks) = DocumentClicks::new() else {
        tracing::warn!("no document; analytics disabled");
        return None;
    };

    let recorder = InteractionRecorder::new(clicks, config);
    recorder.add_sink(TagSink::new(config.measurement_id.as_str()));
    recorder.add_sink(DataLayerSink);
    Some(recorder)
}

/// Records a page view after every completed navigation.
#[component]
#[allow(clippy::unused_unit)]
pub fn PageViews() -> impl IntoView {
    let recorder = use_context::<RecorderContext>();
    let location = use_location();

    Effect::new(move || {
        let path = format!("{}{}", location.pathname.get(), location.search.get());
        if let Some(recorder) = recorder {
            recorder.with_value(|recorder| {
                if let Some(recorder) = recorder {
                    recorder.record_page_view(&path, None);
                }
            });
        }
    });

    view! {}
}
