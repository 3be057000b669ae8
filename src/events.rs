use crate::camera::MapboxCamera;
use crate::constants::{AMENITY_ID_ATTR, AMENITY_LIST_ID, PANEL_CLOSE_ID};
use crate::core::{AmenityId, SelectionController, SelectionState};
use crate::dom;
use crate::sidebar;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<SelectionController<MapboxCamera>>>;

pub fn handle_select(controller: &SharedController, id: AmenityId) {
    let refocus = controller.borrow().is_selected(id);
    let result = controller.borrow_mut().select(id);
    match result {
        Ok(m) => {
            let c = controller.borrow();
            let name = c.registry().get(id).map(|p| p.name.as_str()).unwrap_or("?");
            log::info!(
                "[select] {}{} at {:.2} km, {} min walk",
                name,
                if refocus { " (refocus)" } else { "" },
                m.distance_km,
                m.duration_min
            );
        }
        Err(e) => log::warn!("[select] rejected: {}", e),
    }
    refresh(controller);
}

/// Returns whether there was a selection to clear.
pub fn handle_reset(controller: &SharedController) -> bool {
    if controller.borrow().state() == SelectionState::Idle {
        return false;
    }
    controller.borrow_mut().reset();
    log::info!("[reset] selection cleared");
    refresh(controller);
    true
}

pub fn refresh(controller: &SharedController) {
    if let Some(document) = dom::window_document() {
        sidebar::render(&document, &*controller.borrow());
    }
}

/// Amenity id carried by the clicked sidebar entry, if any.
fn clicked_amenity(ev: &web::MouseEvent) -> Option<AmenityId> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let entry = target
        .closest(&format!("[{}]", AMENITY_ID_ATTR))
        .ok()
        .flatten()?;
    entry.get_attribute(AMENITY_ID_ATTR)?.parse().ok()
}

// The list is redrawn on every change, so clicks are delegated to its container.
pub fn wire_sidebar(document: &web::Document, controller: &SharedController) {
    if let Some(list) = document.get_element_by_id(AMENITY_LIST_ID) {
        let controller_list = controller.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(id) = clicked_amenity(&ev) {
                handle_select(&controller_list, id);
            }
        }) as Box<dyn FnMut(_)>);
        _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let controller_close = controller.clone();
    dom::add_click_listener(document, PANEL_CLOSE_ID, move || {
        handle_reset(&controller_close);
    });
}

// Escape dismisses the detail panel like its close button
pub fn wire_escape_key(controller: &SharedController) {
    if let Some(window) = web::window() {
        let controller = controller.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" && handle_reset(&controller) {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
