use super::{query, query_all};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

const HIDDEN_CLASS: &str = "d-none";

fn set_court_filters(document: &Document, checked: bool) {
    for checkbox in query_all(document, ".court-filter") {
        if let Ok(checkbox) = checkbox.dyn_into::<HtmlInputElement>() {
            checkbox.set_checked(checked);
        }
    }
}

fn court_filter_button(document: &Document, selector: &str, checked: bool) -> Option<EventListener> {
    let button = query(document, selector)?;
    let document = document.clone();
    Some(EventListener::new_with_options(
        &button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            set_court_filters(&document, checked);
        },
    ))
}

/// Hides every `group` element, then reveals `#{value}{suffix}`.
fn reveal(document: &Document, group: &str, value: &str, suffix: &str) -> Option<Element> {
    for form in query_all(document, group) {
        let _ = form.class_list().add_1(HIDDEN_CLASS);
    }
    let selected = document.get_element_by_id(&format!("{}{}", value, suffix))?;
    let _ = selected.class_list().remove_1(HIDDEN_CLASS);
    Some(selected)
}

fn research_forms(document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    if !query_all(document, ".court-filter").is_empty() {
        listeners.extend(court_filter_button(document, "#select-all-courts", true));
        listeners.extend(court_filter_button(document, "#clear-all-courts", false));
    }

    if let Some(form) = query(document, "#document-analysis-form") {
        let document = document.clone();
        listeners.push(EventListener::new(&form, "submit", move |_| {
            if let Some(loading) = query(&document, "#analysis-loading") {
                let _ = loading.class_list().remove_1(HIDDEN_CLASS);
            }
        }));
    }
    listeners
}

fn document_generation(document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(selector) = query(document, "#template-selector") {
        let document = document.clone();
        listeners.push(EventListener::new(&selector, "change", move |event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            reveal(&document, ".template-form", &select.value(), "-form");
        }));
    }

    for radio in query_all(document, "input[name=\"generation_method\"]") {
        let document = document.clone();
        listeners.push(EventListener::new(&radio, "change", move |event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            reveal(
                &document,
                ".generation-form",
                &input.value(),
                "-generation-form",
            );
        }));
    }
    listeners
}

pub fn bind(document: &Document) -> Vec<EventListener> {
    let mut listeners = research_forms(document);
    listeners.extend(document_generation(document));
    listeners
}
