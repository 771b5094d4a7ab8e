use std::rc::Rc;
use yew::prelude::*;

use spot_price_dashboard::components::{Chart, SettingsToggle, Status, Summary};
use spot_price_dashboard::hooks::{
    use_breakpoint::use_breakpoint, use_clock::use_clock, use_prices::use_prices,
    use_settings::use_settings,
};
use spot_price_dashboard::models::chart::ChartDescription;

#[function_component(App)]
fn app() -> Html {
    let state = use_prices();
    let now = use_clock();
    let breakpoint = use_breakpoint();
    let settings = use_settings();

    let description = state.data().map(|prices| {
        let visible = prices.visible(&now, settings.show_only_after_now);
        Rc::new(ChartDescription::build(&visible, &now))
    });

    html! {
        <div class={classes!("app-container", breakpoint.code())}>
            <header class="app-header">
                <h1>{"Pörssisähkön hinta"}</h1>
            </header>

            <main class="app-main">
                <Status state={(*state).clone()} />

                if let Some(prices) = state.data() {
                    <section class="data-section">
                        <Summary prices={prices.clone()} {now} />
                    </section>
                }

                if let Some(description) = description {
                    <section class="chart-section">
                        <SettingsToggle settings={settings.clone()} />
                        <Chart {description} {breakpoint} />
                    </section>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    spot_price_dashboard::logging::init_tracing();
    yew::Renderer::<App>::new().render();
}
