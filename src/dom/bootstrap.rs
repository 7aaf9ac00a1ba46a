use super::{query_all, window};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Popover, JsValue>;
}

fn bootstrap_loaded() -> bool {
    window()
        .ok()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("bootstrap")).ok())
        .is_some_and(|bootstrap| !bootstrap.is_undefined() && !bootstrap.is_null())
}

/// Attaches Bootstrap tooltips and popovers to `[data-bs-toggle]` elements.
/// Returns how many widgets were created; zero when Bootstrap is not loaded.
pub fn init_widgets(document: &Document) -> usize {
    let tooltips = query_all(document, "[data-bs-toggle=\"tooltip\"]");
    let popovers = query_all(document, "[data-bs-toggle=\"popover\"]");
    if tooltips.is_empty() && popovers.is_empty() {
        return 0;
    }
    if !bootstrap_loaded() {
        log::debug!("Bootstrap not loaded, skipping tooltips and popovers");
        return 0;
    }

    let mut created = 0;
    for element in &tooltips {
        match Tooltip::new(element) {
            Ok(_) => created += 1,
            Err(err) => log::warn!("Could not create tooltip: {:?}", err),
        }
    }
    for element in &popovers {
        match Popover::new(element) {
            Ok(_) => created += 1,
            Err(err) => log::warn!("Could not create popover: {:?}", err),
        }
    }
    created
}
