use crate::hooks::use_prices::DataState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DataState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DataState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Ladataan hintoja..."}</p>
            </div>
        },
        DataState::Loaded(prices) if prices.is_empty() => html! {
            <div class="status error">
                <p>{"Hintoja ei ole saatavilla"}</p>
            </div>
        },
        DataState::Loaded(_) => html! {},
        DataState::Error(msg) => html! {
            <div class="status error">
                <p>{"Virhe: "}{msg}</p>
            </div>
        },
    }
}
