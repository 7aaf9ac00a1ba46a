use super::{document, query_all};
use crate::model::delete_prompt;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlFormElement};

fn confirmed(item_name: &str) -> bool {
    gloo::dialogs::confirm(&delete_prompt(item_name))
}

/// Forms marked `data-confirm-delete="<item>"` only submit once the user
/// agrees.
pub fn bind(document: &Document) -> Vec<EventListener> {
    query_all(document, "form[data-confirm-delete]")
        .into_iter()
        .map(|form| {
            let item_name = form.get_attribute("data-confirm-delete").unwrap_or_default();
            EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if !confirmed(&item_name) {
                        event.prevent_default();
                    }
                },
            )
        })
        .collect()
}

/// Inline-handler form for templates: `onclick="return confirmDelete('form-id', 'case')"`.
/// Submits the form itself on confirmation and always returns `false`.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(form_id: &str, item_name: &str) -> bool {
    if confirmed(item_name) {
        let form = document()
            .ok()
            .and_then(|document| document.get_element_by_id(form_id))
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
        match form {
            Some(form) => {
                if let Err(err) = form.submit() {
                    log::error!("Could not submit form {}: {:?}", form_id, err);
                }
            }
            None => log::warn!("Delete form {} not found", form_id),
        }
    }
    false
}
