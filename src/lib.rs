//! Score Polisher WASM Module
//!
//! Recomputes the horizontal layout of a tablature score after an edit:
//! simultaneous events line up across staves and voices, bars are resized
//! to fit their content, and anchored annotations follow their notes.

pub mod error;
pub mod models;
pub mod utils;
pub mod polish;
pub mod api;

// Re-export commonly used types
pub use error::ScoreError;
pub use models::*;
pub use polish::{polish, polish_with, PolishReport, PolishSettings, ScoreShifter, SlotShifter};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            crate::wasm_error!("Failed to initialize logger: {}", e);
        }
    }

    log::info!("Score polisher WASM module initialized");
}
