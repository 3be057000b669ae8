use crate::constants::{BUILDING_ICON, CENTER_MARKER_CLASS, MARKER_CLASS};
use crate::dom;
use crate::events::{self, SharedController};
use crate::mapbox;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fixed, non-interactive marker for the building itself.
pub fn add_origin_marker(
    document: &web::Document,
    map: &mapbox::Map,
    controller: &SharedController,
) -> anyhow::Result<()> {
    let origin = controller.borrow().origin();
    let el = dom::create_element(document, "div", CENTER_MARKER_CLASS)?;
    el.set_text_content(Some(BUILDING_ICON));
    mapbox::add_marker(map, &el, origin)?;
    Ok(())
}

/// One clickable marker per amenity, in registry order.
pub fn add_amenity_markers(
    document: &web::Document,
    map: &mapbox::Map,
    controller: &SharedController,
) -> anyhow::Result<()> {
    let points: Vec<_> = controller
        .borrow()
        .registry()
        .iter()
        .map(|p| (p.id, p.coordinate, p.color.clone(), p.icon.clone()))
        .collect();

    for (id, coordinate, color, icon) in points {
        let el = dom::create_element(document, "div", MARKER_CLASS)?;
        el.set_text_content(Some(&icon));
        _ = el.set_attribute("style", &format!("background-color:{}", color));

        let controller = controller.clone();
        let closure = Closure::wrap(Box::new(move || {
            events::handle_select(&controller, id);
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        mapbox::add_marker(map, &el, coordinate)?;
    }
    log::info!(
        "[markers] placed {} amenity markers",
        controller.borrow().registry().len()
    );
    Ok(())
}
