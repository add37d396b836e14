//! Stored-document operations behind the WASM API
//!
//! The editor keeps one canonical score in WASM memory. These functions
//! hold the logic so it can be used (and tested) without a JavaScript host.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;

use crate::error::ScoreError;
use crate::models::Score;
use crate::polish::{polish_with, PolishReport, PolishSettings, ScoreShifter};

// WASM-owned score storage (canonical source of truth)
lazy_static! {
    static ref DOCUMENT: Mutex<Option<Score>> = Mutex::new(None);
}

fn document() -> MutexGuard<'static, Option<Score>> {
    DOCUMENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Validate and polish a score, returning the polished copy
pub fn polish_score(mut score: Score, settings: &PolishSettings) -> Result<(Score, PolishReport), ScoreError> {
    score.validate()?;
    let report = polish_with(&mut score, settings, &mut ScoreShifter);
    Ok((score, report))
}

/// Polish a score given as JSON and return it as JSON
pub fn polish_score_json(json: &str, settings: &PolishSettings) -> Result<String, ScoreError> {
    let score = Score::from_json(json)?;
    let (score, report) = polish_score(score, settings)?;
    log::info!("polished score from JSON: {:?}", report);
    score.to_json()
}

/// Replace the stored score after validating it
pub fn load_document(score: Score) -> Result<(), ScoreError> {
    score.validate()?;
    log::info!("loaded score with {} system(s)", score.systems.len());
    *document() = Some(score);
    Ok(())
}

/// Polish the stored score in place
pub fn polish_document(settings: &PolishSettings) -> Result<PolishReport, ScoreError> {
    let mut guard = document();
    let score = guard.as_mut().ok_or(ScoreError::NoDocument)?;
    Ok(polish_with(score, settings, &mut ScoreShifter))
}

/// Copy of the stored score
pub fn document_snapshot() -> Result<Score, ScoreError> {
    document().clone().ok_or(ScoreError::NoDocument)
}
