use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::breakpoint::{Breakpoint, BreakpointDetector};

/// Custom hook reporting the active viewport breakpoint
#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let detector = use_mut_ref(BreakpointDetector::new);
    let breakpoint = use_state(|| detector.borrow().current());

    // Effect: Watch all six media queries
    {
        let setter = breakpoint.setter();
        use_effect_with((), move |_| {
            let listeners = setup_media_query_listeners(&detector, &setter);
            move || drop(listeners)
        });
    }

    *breakpoint
}

/// Reads each media query once, then listens for its `change` events
fn setup_media_query_listeners(
    detector: &Rc<RefCell<BreakpointDetector>>,
    setter: &UseStateSetter<Breakpoint>,
) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        gloo::console::warn!("No window, keeping the default breakpoint");
        return Vec::new();
    };

    let listeners: Vec<EventListener> = Breakpoint::all()
        .iter()
        .filter_map(|&bucket| {
            let mq = window.match_media(bucket.media_query()).ok().flatten()?;

            detector.borrow_mut().handle_change(bucket, mq.matches());
            setter.set(detector.borrow().current());

            let target = mq.clone().dyn_into::<web_sys::EventTarget>().ok()?;
            let detector = detector.clone();
            let setter = setter.clone();
            Some(EventListener::new(&target, "change", move |_event| {
                detector.borrow_mut().handle_change(bucket, mq.matches());
                setter.set(detector.borrow().current());
            }))
        })
        .collect();

    // Without media query support, classify the width once
    if listeners.is_empty()
        && let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64())
    {
        detector
            .borrow_mut()
            .handle_change(Breakpoint::for_width(width as u32), true);
        setter.set(detector.borrow().current());
    }

    listeners
}
