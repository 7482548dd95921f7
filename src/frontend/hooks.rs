use web_sys::{window, HtmlElement};
use yew::prelude::*;

use super::dom::{log_dom_failure, scroll_y, ElementPointerSurface, EventListener, WindowScheduler};
use crate::hover::{track_pointer, PointerPosition};
use crate::typewriter::{Typewriter, TypewriterRun, TypewriterTiming};

/// Pointer position relative to `container`, idle until the node is mounted.
#[hook]
pub fn use_pointer_glow(container: NodeRef) -> PointerPosition {
    let position = use_state_eq(PointerPosition::idle);

    {
        let position = position.clone();
        use_effect_with(container, move |container| {
            let session = container.cast::<HtmlElement>().and_then(|element| {
                let setter = position.clone();
                track_pointer(&ElementPointerSurface::new(element), move |next| {
                    setter.set(next)
                })
                .map_err(|error| log_dom_failure("listener_attach_failed", &error))
                .ok()
            });

            move || {
                drop(session);
                position.set(PointerPosition::idle());
            }
        });
    }

    *position
}

/// Current prefix of `target`; restarts from empty whenever `target` or `timing` changes.
#[hook]
pub fn use_typewriter(target: AttrValue, timing: TypewriterTiming) -> AttrValue {
    let displayed = use_state_eq(AttrValue::default);

    {
        let displayed = displayed.clone();
        use_effect_with((target, timing), move |(target, timing)| {
            let run = TypewriterRun::start(
                Typewriter::new(target.as_str(), *timing),
                WindowScheduler,
                move |text: &str| displayed.set(AttrValue::from(text.to_string())),
            );

            move || drop(run)
        });
    }

    (*displayed).clone()
}

#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| scroll_y() > threshold);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let listener = window().and_then(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    scrolled.set(scroll_y() > threshold)
                })
                .map_err(|error| log_dom_failure("listener_attach_failed", &error))
                .ok()
            });

            move || drop(listener)
        });
    }

    *scrolled
}
