use chrono::Local;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{error::AppError, prices::Prices};
use crate::services::api::{ApiConfig, PriceClient, ReqwestFetch};

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Prices>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<Prices>> {
        match self {
            DataState::Loaded(prices) => Some(prices),
            _ => None,
        }
    }
}

impl From<Result<Prices, AppError>> for DataState {
    fn from(result: Result<Prices, AppError>) -> Self {
        match result {
            Ok(prices) => DataState::Loaded(Rc::new(prices)),
            Err(e) => DataState::Error(e.to_string()),
        }
    }
}

/// Loads today's prices once, when the page mounts.
#[hook]
pub fn use_prices() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = load_prices().await;
                if let Err(e) = &result {
                    gloo::console::error!(&format!("Failed to load prices: {e}"));
                }
                state.set(result.into());
            });

            || ()
        });
    }

    state
}

async fn load_prices() -> Result<Prices, AppError> {
    let client = PriceClient::new(ApiConfig::default(), Some(ReqwestFetch::browser()?))?;
    let records = client.fetch_todays_prices(&Local::now()).await?;
    Ok(Prices::new(records))
}
