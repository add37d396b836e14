//! WASM build test
//!
//! Exercises the JavaScript-facing API inside a wasm runtime.

#![cfg(target_arch = "wasm32")]

use score_polish_wasm::api::{get_score, load_score, polish_document, polish_score_json};
use score_polish_wasm::{Barline, DurationType, PolishReport, Position, Score, Staff, System};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn loose_score() -> Score {
    let mut system = System::new();
    system.insert_barline(Barline::single(0));
    system.insert_barline(Barline::single(10));
    let mut staff = Staff::new();
    staff.voices[0].insert_position(Position::new(3, DurationType::Quarter));
    staff.voices[0].insert_position(Position::new(8, DurationType::Half));
    system.staves.push(staff);

    let mut score = Score::new();
    score.add_system(system);
    score
}

#[wasm_bindgen_test]
fn test_polish_score_json() {
    let json = loose_score().to_json().unwrap();
    let polished = polish_score_json(&json).unwrap();

    let score = Score::from_json(&polished).unwrap();
    assert_eq!(score.systems[0].barlines[1].slot, 6);
}

#[wasm_bindgen_test]
fn test_stored_document_round_trip() {
    let score_js = serde_wasm_bindgen::to_value(&loose_score()).unwrap();
    load_score(score_js).unwrap();

    let report: PolishReport =
        serde_wasm_bindgen::from_value(polish_document(JsValue::UNDEFINED).unwrap()).unwrap();
    assert_eq!(report.positions_moved, 2);

    let score: Score = serde_wasm_bindgen::from_value(get_score().unwrap()).unwrap();
    assert_eq!(score.systems[0].staves[0].voices[0].positions[1].slot, 2);
}

#[wasm_bindgen_test]
fn test_malformed_json_is_an_error() {
    assert!(polish_score_json("not json").is_err());
}
