use availio::AvailioConfig;
use availio::showcase::{GeometryConfig, ShowcaseController, ShowcasePreference, Side, compute_emphasis_geometry};
use leptos::prelude::*;

use crate::browser::{BrowserStore, IntervalTicker};

type Controller = ShowcaseController<BrowserStore, IntervalTicker>;
type ControllerSlot = StoredValue<Option<Controller>, LocalStorage>;

/// Run `op` on the live controller and publish the emphasized side.
fn drive(
    slot: ControllerSlot,
    set_side: WriteSignal<Side>,
    op: impl FnOnce(&mut Controller) -> ShowcasePreference,
) {
    let preference = slot
        .try_update_value(|controller| controller.as_mut().map(op))
        .flatten();
    if let Some(preference) = preference {
        set_side.set(preference.side);
    }
}

/// Hero with the owner/member split panels.
#[component]
pub fn Showcase() -> impl IntoView {
    let config = expect_context::<AvailioConfig>().showcase;
    let geometry_config = GeometryConfig::from(&config);
    let slot: ControllerSlot = StoredValue::new_local(None);
    let (side, set_side) = signal(Side::default());

    let ticker = IntervalTicker::new(move || drive(slot, set_side, Controller::on_automatic_tick));
    let mut controller = ShowcaseController::new(BrowserStore::open(), ticker, &config);
    set_side.set(controller.initialize().side);
    controller.start();
    slot.set_value(Some(controller));

    on_cleanup(move || {
        slot.try_update_value(|controller| {
            if let Some(mut controller) = controller.take() {
                controller.stop();
            }
        });
    });

    let geometry = Memo::new(move |_| compute_emphasis_geometry(side.get(), &geometry_config));
    let select = move |target: Side| drive(slot, set_side, |c| c.on_manual_select(target));
    let hover_end = move || drive(slot, set_side, Controller::on_hover_end);

    view! {
        <section class="showcase">
            <div class="container">
                <h1 class="showcase-title">
                    "Let's " <span class="showcase-accent">"improve"</span> " your gym experience"
                </h1>
                <p class="showcase-description">
                    <strong>"Availio"</strong>
                    " uses smart IoT tracking to monitor gym equipment in real time. "
                    "Our dashboard helps gyms make better decisions, while our app gives "
                    "members a seamless, data-driven workout experience."
                </p>
            </div>
            <div class="box-container">
                <div
                    class="box left-box"
                    class:emphasized=move || side.get() == Side::Left
                    style:clip-path=move || geometry.get().left.to_clip_path()
                    on:mouseenter=move |_| select(Side::Left)
                    on:mouseleave=move |_| hover_end()
                    on:click=move |_| select(Side::Left)
                >
                    <div class="box-content">
                        <span class="box-overline">"For Gyms"</span>
                        <h2 class="box-title">"See your floor in real time"</h2>
                        <p class="box-text">
                            "Utilization, peak hours and idle machines on one dashboard."
                        </p>
                        <a href="/contact" class="btn btn-primary" data-ga-event="showcase_cta" data-ga-label="Gyms: Request Demo">
                            "Request Demo"
                        </a>
                    </div>
                </div>
                <div
                    class="box right-box"
                    class:emphasized=move || side.get() == Side::Right
                    style:clip-path=move || geometry.get().right.to_clip_path()
                    on:mouseenter=move |_| select(Side::Right)
                    on:mouseleave=move |_| hover_end()
                    on:click=move |_| select(Side::Right)
                >
                    <div class="box-content">
                        <span class="box-overline">"For Members"</span>
                        <h2 class="box-title">"Never wait for a machine again"</h2>
                        <p class="box-text">
                            "Check what is free before you leave home and plan your workout around it."
                        </p>
                        <a href="/pricing" class="btn btn-secondary" data-ga-event="showcase_cta" data-ga-label="Members: Get the App">
                            "Get the App"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
