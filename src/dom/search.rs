use super::query_all;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// `.clear-search` empties and refocuses the form's search input.
pub fn bind(document: &Document) -> Vec<EventListener> {
    query_all(document, ".search-form")
        .into_iter()
        .filter_map(|form| {
            let input = form
                .query_selector("input[type=\"search\"]")
                .ok()
                .flatten()?
                .dyn_into::<HtmlInputElement>()
                .ok()?;
            let clear = form.query_selector(".clear-search").ok().flatten()?;
            Some(EventListener::new(&clear, "click", move |_| {
                input.set_value("");
                let _ = input.focus();
            }))
        })
        .collect()
}
