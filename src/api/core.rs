//! WASM API for score polishing
//!
//! JavaScript-facing entry points. The editing layer calls one of these
//! after any edit that changes durations or inserts/removes positions,
//! before the score is rendered again.

use wasm_bindgen::prelude::*;

use super::document;
use super::helpers::{deserialize, deserialize_or_default, score_error, serialize};
use crate::models::Score;
use crate::polish::PolishSettings;
use crate::{wasm_error, wasm_info, wasm_log};

/// Polish a score object and return the polished copy
///
/// # Parameters
/// - `score_js`: Score object
/// - `settings_js`: optional PolishSettings (`undefined` for defaults)
#[wasm_bindgen(js_name = polishScore)]
pub fn polish_score(score_js: JsValue, settings_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("polishScore called");

    let score: Score = deserialize(score_js, "Score deserialization error")?;
    let settings: PolishSettings = deserialize_or_default(settings_js, "Settings deserialization error")?;

    let (score, report) = document::polish_score(score, &settings).map_err(score_error)?;
    wasm_log!("  {:?}", report);

    serialize(&score, "Score serialization error")
}

/// Polish a score given as JSON text, returning JSON text
#[wasm_bindgen(js_name = polishScoreJson)]
pub fn polish_score_json(json: &str) -> Result<String, JsValue> {
    wasm_info!("polishScoreJson called ({} bytes)", json.len());

    document::polish_score_json(json, &PolishSettings::default()).map_err(|e| {
        wasm_error!("polishScoreJson failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

/// Store a score as the current document
#[wasm_bindgen(js_name = loadScore)]
pub fn load_score(score_js: JsValue) -> Result<(), JsValue> {
    wasm_info!("loadScore called");

    let score: Score = deserialize(score_js, "Score deserialization error")?;
    document::load_document(score).map_err(score_error)?;

    wasm_info!("loadScore completed successfully");
    Ok(())
}

/// Polish the stored document in place and return the pass report
#[wasm_bindgen(js_name = polishDocument)]
pub fn polish_document(settings_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("polishDocument called");

    let settings: PolishSettings = deserialize_or_default(settings_js, "Settings deserialization error")?;
    let report = document::polish_document(&settings).map_err(score_error)?;

    wasm_info!(
        "  bars={}, widened={}, shrunk={}, positions moved={}, annotations moved={}",
        report.bars,
        report.bars_widened,
        report.bars_shrunk,
        report.positions_moved,
        report.annotations_moved
    );
    serialize(&report, "Report serialization error")
}

/// Snapshot of the stored document
#[wasm_bindgen(js_name = getScore)]
pub fn get_score() -> Result<JsValue, JsValue> {
    wasm_info!("getScore called");

    let score = document::document_snapshot().map_err(score_error)?;
    serialize(&score, "Score serialization error")
}
