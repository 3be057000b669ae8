//! Minimal bindings to the Mapbox GL JS global (`mapboxgl`) loaded by the page.

use crate::core::Coordinate;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone, Debug)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &Map, options: &JsValue);

    #[wasm_bindgen(method)]
    fn once(this: &Map, event: &str, callback: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone, Debug)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;
}

fn js_object(entries: &[(&str, JsValue)]) -> anyhow::Result<JsValue> {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(obj.into())
}

#[inline]
fn lng_lat(c: Coordinate) -> JsValue {
    let [lon, lat] = c.lng_lat();
    js_sys::Array::of2(&lon.into(), &lat.into()).into()
}

pub fn set_access_token(token: &str) -> anyhow::Result<()> {
    let global = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if global.is_undefined() {
        anyhow::bail!("mapboxgl is not loaded");
    }
    js_sys::Reflect::set(
        &global,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn create_map(container_id: &str, style: &str, center: Coordinate, zoom: f64) -> anyhow::Result<Map> {
    let options = js_object(&[
        ("container", JsValue::from_str(container_id)),
        ("style", JsValue::from_str(style)),
        ("center", lng_lat(center)),
        ("zoom", JsValue::from_f64(zoom)),
    ])?;
    Map::new(&options).map_err(|e| anyhow::anyhow!("map init failed: {:?}", e))
}

/// Resolves once the map has fetched its style and first tiles.
pub async fn loaded(map: &Map) -> anyhow::Result<()> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        map.once("load", &resolve);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn fly_to_options(target: Coordinate, zoom: f64, transition_ms: u32) -> anyhow::Result<JsValue> {
    js_object(&[
        ("center", lng_lat(target)),
        ("zoom", JsValue::from_f64(zoom)),
        ("duration", JsValue::from_f64(transition_ms as f64)),
    ])
}

/// Place `element` on the map at `at`.
pub fn add_marker(map: &Map, element: &web::HtmlElement, at: Coordinate) -> anyhow::Result<Marker> {
    let options = js_object(&[("element", element.clone().into())])?;
    Ok(Marker::new(&options).set_lng_lat(&lng_lat(at)).add_to(map))
}
