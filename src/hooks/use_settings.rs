use std::rc::Rc;
use yew::prelude::*;

use crate::services::storage::{KeyValueStore, LocalSettings, LocalStorageStore, MemoryStore};

/// Handle returned by `use_settings` hook
#[derive(Clone, PartialEq)]
pub struct SettingsHandle {
    pub show_only_after_now: bool,
    pub set_show_only_after_now: Callback<bool>,
}

/// Custom hook for the user's settings with localStorage persistence
#[hook]
pub fn use_settings() -> SettingsHandle {
    let settings = use_mut_ref(|| LocalSettings::load(open_store()));
    let show_only_after_now = use_state(|| *settings.borrow().show_only_after_now.value());

    let set_show_only_after_now = {
        let show_only_after_now = show_only_after_now.clone();
        Callback::from(move |value: bool| {
            if let Err(e) = settings.borrow_mut().show_only_after_now.set(value) {
                gloo::console::warn!(&format!("Failed to save setting: {e}"));
            }
            show_only_after_now.set(*settings.borrow().show_only_after_now.value());
        })
    };

    SettingsHandle {
        show_only_after_now: *show_only_after_now,
        set_show_only_after_now,
    }
}

/// localStorage when there is one, otherwise settings only last for the page
fn open_store() -> Rc<dyn KeyValueStore> {
    match LocalStorageStore::new() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            gloo::console::warn!(&format!("{e}, settings will not persist"));
            Rc::new(MemoryStore::new())
        }
    }
}
