use chrono::{DateTime, Local};
use std::rc::Rc;
use yew::prelude::*;

use crate::models::chart::PRICE_UNIT;
use crate::models::prices::Prices;
use crate::utils::price_math::format_display_price;
use crate::utils::time_format::{format_date_day, format_date_time, format_seconds};

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub prices: Rc<Prices>,
    pub now: DateTime<Local>,
}

/// Current price and the time left until it changes.
#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let Some(current) = props.prices.current(&props.now) else {
        return html! {
            <div class="data-summary">
                <p>{"Ei hintaa tälle hetkelle"}</p>
            </div>
        };
    };

    let countdown = props
        .prices
        .seconds_until_next_change(&props.now)
        .map(format_seconds)
        .unwrap_or_default();
    let start = current.start.with_timezone(&Local);
    let end = current.end.with_timezone(&Local);

    html! {
        <div class="data-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Hinta nyt"}</h3>
                    <p class="summary-value">
                        {format!("{} {PRICE_UNIT}", format_display_price(current.price))}
                    </p>
                </div>
                <div class="summary-item">
                    <h3>{format!("{} {} - {}", format_date_day(&start), format_date_time(&start), format_date_time(&end))}</h3>
                    <p class="summary-value">{countdown}</p>
                </div>
            </div>
        </div>
    }
}
