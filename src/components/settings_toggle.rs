use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_settings::SettingsHandle;

#[derive(Properties, PartialEq)]
pub struct SettingsToggleProps {
    pub settings: SettingsHandle,
}

/// Checkbox for hiding prices that have already passed
#[function_component(SettingsToggle)]
pub fn settings_toggle(props: &SettingsToggleProps) -> Html {
    let onchange = {
        let set = props.settings.set_show_only_after_now.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set.emit(input.checked());
        })
    };

    html! {
        <label class="settings-toggle">
            <input
                type="checkbox"
                checked={props.settings.show_only_after_now}
                {onchange}
            />
            {"Näytä vain tulevat tunnit"}
        </label>
    }
}
