//! Score polishing WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `document`: stored-document logic, usable without a JavaScript host
//! - `core`: the `#[wasm_bindgen]` entry points

pub mod helpers;
pub mod document;
pub mod core;

pub use self::core::{get_score, load_score, polish_document, polish_score, polish_score_json};
