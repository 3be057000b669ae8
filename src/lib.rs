#![cfg(target_arch = "wasm32")]
use crate::constants::{LOADING_OVERLAY_ID, MAP_CONTAINER_ID, MAP_STYLE_URL, TOKEN_META_NAME};
use crate::core::constants::OVERVIEW_ZOOM;
use crate::core::{load_error_text, AmenityRegistry, SelectionController, ORIGIN};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod mapbox;
mod markers;
mod overlay;
mod sidebar;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("amenity-map starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                dom::set_text(&document, LOADING_OVERLAY_ID, &load_error_text(&e.to_string()));
                overlay::show(&document, LOADING_OVERLAY_ID);
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Fail before touching the map if the amenity list is unusable
    let registry = AmenityRegistry::builtin()?;

    let token = dom::meta_content(&document, TOKEN_META_NAME)
        .ok_or_else(|| anyhow::anyhow!("missing <meta name=\"{}\">", TOKEN_META_NAME))?;
    mapbox::set_access_token(&token)?;
    let map = mapbox::create_map(MAP_CONTAINER_ID, MAP_STYLE_URL, ORIGIN, OVERVIEW_ZOOM)?;

    let controller: events::SharedController = Rc::new(RefCell::new(SelectionController::new(
        ORIGIN,
        registry,
        camera::MapboxCamera::new(map.clone()),
    )));

    // Sidebar is usable while tiles are still loading
    events::wire_sidebar(&document, &controller);
    events::wire_escape_key(&controller);
    events::refresh(&controller);

    mapbox::loaded(&map).await?;
    overlay::hide(&document, LOADING_OVERLAY_ID);
    log::info!("[map] loaded");

    markers::add_origin_marker(&document, &map, &controller)?;
    markers::add_amenity_markers(&document, &map, &controller)?;
    Ok(())
}
