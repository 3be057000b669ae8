use crate::constants::*;
use crate::core::{detail_panel, sidebar_entries, CameraService, SelectionController, SidebarEntry};
use crate::dom;
use crate::overlay;
use web_sys as web;

/// Redraw the amenity list and the detail panel from the current selection.
pub fn render<C: CameraService>(document: &web::Document, controller: &SelectionController<C>) {
    if let Err(e) = render_list(document, controller) {
        log::error!("[sidebar] list render error: {:?}", e);
    }
    render_panel(document, controller);
}

fn render_list<C: CameraService>(
    document: &web::Document,
    controller: &SelectionController<C>,
) -> anyhow::Result<()> {
    let list = document
        .get_element_by_id(AMENITY_LIST_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", AMENITY_LIST_ID))?;
    let entries = sidebar_entries(controller.registry(), controller.selected_id());

    // Update the existing buttons in place so keyboard focus survives a select
    let buttons = list.children();
    if buttons.length() as usize != entries.len() {
        return build_list(document, &list, &entries);
    }
    for (i, entry) in entries.iter().enumerate() {
        if let Some(button) = buttons.item(i as u32) {
            apply_entry(&button, entry);
        }
    }
    Ok(())
}

fn build_list(
    document: &web::Document,
    list: &web::Element,
    entries: &[SidebarEntry],
) -> anyhow::Result<()> {
    list.set_inner_html("");
    for entry in entries {
        let button = dom::create_element(document, "button", ENTRY_CLASS)?;
        _ = button.set_attribute(AMENITY_ID_ATTR, &entry.id.to_string());

        let bubble = dom::create_element(document, "div", ENTRY_BUBBLE_CLASS)?;
        bubble.set_text_content(Some(&entry.icon));

        let name = dom::create_element(document, "div", ENTRY_NAME_CLASS)?;
        name.set_text_content(Some(&entry.name));

        button
            .append_child(&bubble)
            .and_then(|_| button.append_child(&name))
            .and_then(|_| list.append_child(&button))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        apply_entry(&button, entry);
    }
    log::debug!("[sidebar] built {} entries", entries.len());
    Ok(())
}

// Highlight class and icon swatch; the bubble is the button's first child
fn apply_entry(button: &web::Element, entry: &SidebarEntry) {
    if entry.highlighted {
        button.set_class_name(&format!("{} {}", ENTRY_CLASS, ENTRY_SELECTED_CLASS));
    } else {
        button.set_class_name(ENTRY_CLASS);
    }
    if let Some(bubble) = button.first_element_child() {
        _ = bubble.set_attribute("style", &format!("background-color:{}", entry.swatch));
    }
}

fn render_panel<C: CameraService>(document: &web::Document, controller: &SelectionController<C>) {
    let (Some(point), Some(metrics)) = (controller.selected(), controller.metrics()) else {
        overlay::hide(document, PANEL_ID);
        return;
    };
    let panel = detail_panel(point, &metrics);
    dom::set_text(document, PANEL_NAME_ID, &panel.name);
    dom::set_text(document, PANEL_ICON_ID, &panel.icon);
    dom::set_text(document, PANEL_DISTANCE_ID, &panel.distance_text);
    dom::set_text(document, PANEL_DURATION_ID, &panel.duration_text);
    if let Some(icon) = document.get_element_by_id(PANEL_ICON_ID) {
        _ = icon.set_attribute("style", &format!("background-color:{}", panel.color));
    }
    overlay::show(document, PANEL_ID);
}
