use super::query;
use crate::model::{ClickTarget, FabMenu};
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

const ACTIVE_CLASS: &str = "active";

fn apply(container: &Element, menu: FabMenu) {
    let _ = container
        .class_list()
        .toggle_with_force(ACTIVE_CLASS, menu.is_active());
}

fn event_key(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

pub fn bind(document: &Document) -> Vec<EventListener> {
    let Some(container) = query(document, ".fab-container") else {
        return Vec::new();
    };
    let Ok(Some(main)) = container.query_selector(".fab-main") else {
        return Vec::new();
    };
    let options = container.query_selector(".fab-options").ok().flatten();

    let mut initial = FabMenu::new();
    if container.class_list().contains(ACTIVE_CLASS) {
        initial.toggle();
    }
    let menu = Rc::new(Cell::new(initial));

    let main_click = {
        let menu = menu.clone();
        let container = container.clone();
        EventListener::new_with_options(
            &main,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let mut state = menu.get();
                state.on_click(ClickTarget::MainButton);
                menu.set(state);
                apply(&container, state);
            },
        )
    };

    let main_key = {
        let menu = menu.clone();
        let container = container.clone();
        EventListener::new_with_options(
            &main,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key) = event_key(event) else {
                    return;
                };
                let mut state = menu.get();
                if state.on_main_key(&key) {
                    event.prevent_default();
                    menu.set(state);
                    apply(&container, state);
                }
            },
        )
    };

    let document_click = {
        let menu = menu.clone();
        let container = container.clone();
        EventListener::new(document, "click", move |event| {
            let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
            let inside = |element: &Element| element.contains(target.as_ref());
            let click = if options.as_ref().is_some_and(|options| inside(options)) {
                ClickTarget::Options
            } else if inside(&container) {
                ClickTarget::Container
            } else {
                ClickTarget::Outside
            };
            let mut state = menu.get();
            state.on_click(click);
            menu.set(state);
            apply(&container, state);
        })
    };

    let document_key = EventListener::new(document, "keydown", move |event| {
        let Some(key) = event_key(event) else {
            return;
        };
        let mut state = menu.get();
        state.on_document_key(&key);
        menu.set(state);
        apply(&container, state);
    });

    vec![main_click, main_key, document_click, document_key]
}
