use std::rc::Rc;
use std::time::Duration;

use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Event, EventTarget, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::hover::{Bounds, PointerSignal, PointerSurface};
use crate::logging::{log_event, LogLevel};
use crate::typewriter::Scheduler;

/// A registered DOM listener. Dropping it removes the listener from its target.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// A pending `setTimeout`, cleared on drop.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay: Duration, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let mut callback = Some(callback);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            browser_millis(delay),
        )?;

        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// A running `setInterval`, cleared on drop.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period: Duration, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            browser_millis(period),
        )?;

        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

fn browser_millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Schedules typewriter ticks on the window timer queue.
#[derive(Clone, Copy, Default)]
pub struct WindowScheduler;

impl Scheduler for WindowScheduler {
    type Timer = Option<Timeout>;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<Timeout> {
        Timeout::new(delay, callback)
            .map_err(|error| log_dom_failure("timer_schedule_failed", &error))
            .ok()
    }
}

pub struct ElementPointerSurface {
    element: HtmlElement,
}

impl ElementPointerSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl PointerSurface for ElementPointerSurface {
    type Subscription = [EventListener; 2];
    type Error = JsValue;

    fn subscribe(
        &self,
        handler: Rc<dyn Fn(PointerSignal)>,
    ) -> Result<[EventListener; 2], JsValue> {
        let on_move = {
            let element = self.element.clone();
            let handler = handler.clone();
            EventListener::new(&self.element, "mousemove", move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                handler(PointerSignal::Move {
                    bounds: Bounds {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                    },
                    client_x: f64::from(event.client_x()),
                    client_y: f64::from(event.client_y()),
                });
            })?
        };
        // if this fails `on_move` drops here and is unregistered
        let on_leave = EventListener::new(&self.element, "mouseleave", move |_| {
            handler(PointerSignal::Leave)
        })?;

        Ok([on_move, on_leave])
    }
}

pub fn log_dom_failure(event: &str, error: &JsValue) {
    log_event(
        LogLevel::Warn,
        event,
        json!({ "error": error.as_string().unwrap_or_else(|| format!("{error:?}")) }),
    );
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_to_section(section_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn set_root_scroll_behavior(value: &str) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<HtmlElement>().ok());

    if let Some(root) = root {
        let _ = root.style().set_property("scroll-behavior", value);
    }
}
