//! DOM wiring. Compiled for wasm32 only.

mod adapters;
mod cart_page;
mod prompt;
mod timers;
mod widgets;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

use vardan_observability::StructuredLogger;

/// Initialise once the document is parsed.
pub fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let win = window.clone();
        let doc = document.clone();
        let closure = Closure::once(move || {
            if let Err(err) = init(&win, &doc) {
                report(&err);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    } else {
        init(&window, &document)
    }
}

fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    cart_page::init(window, document)?;
    widgets::init(window, document)?;
    Ok(())
}

fn report(err: &JsValue) {
    StructuredLogger::new("web")
        .error_builder("page initialisation failed")
        .field("error", format!("{:?}", err))
        .emit();
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// All elements matching `selector` under `root`.
pub(crate) fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` inside `root`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The element an event was dispatched to.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub(crate) fn set_text(document: &Document, selector: &str, text: &str) {
    for el in query_all(document, selector) {
        el.set_text_content(Some(text));
    }
}

pub(crate) fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}
