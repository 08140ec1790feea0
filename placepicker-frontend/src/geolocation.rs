// navigator.geolocation wrapped into a future.

use anyhow::{anyhow, Context};
use leptos::window;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use placepicker_core::entities::geo::MapPoint;

/// Resolve the device's current position.
///
/// Fails when geolocation is unavailable, when the user denies the
/// permission request, or when the reported coordinates are unusable.
pub async fn current_position() -> anyhow::Result<MapPoint> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| anyhow!("geolocation is not available"))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            log::warn!("Unable to query the current position: {err:?}");
        }
    });
    let position = JsFuture::from(promise)
        .await
        .map_err(|err| anyhow!(js_message(&err)))?;

    let coords = js_sys::Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|_| anyhow!("position without coordinates"))?;
    let lat = number_field(&coords, "latitude")?;
    let lng = number_field(&coords, "longitude")?;
    MapPoint::try_from_lat_lng_deg(lat, lng).context("coordinates out of range")
}

fn number_field(value: &JsValue, field: &str) -> anyhow::Result<f64> {
    js_sys::Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_f64())
        .with_context(|| format!("missing {field}"))
}

fn js_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "unknown JS error".to_string())
}
