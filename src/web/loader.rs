//! Fetches `data.json`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::data::ResumeData;
use crate::error::LoadError;

fn js_err(e: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Fetch(format!("{e:?}"))
}

pub async fn load_data(url: &str) -> Result<ResumeData, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: Response = resp.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text = text
        .as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".into()))?;
    ResumeData::from_json(&text)
}
