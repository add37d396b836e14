// Score JSON fixtures: load from disk, validate, polish, write back

use std::fs;

use score_polish_wasm::api::document::{polish_score, polish_score_json};
use score_polish_wasm::{DurationType, PolishSettings, Score, ScoreError};

const FIXTURE: &str = r#"{
  "systems": [
    {
      "barlines": [
        { "slot": 0 },
        { "slot": 12, "barline_type": "EndRepeat", "repeat_count": 2 }
      ],
      "staves": [
        {
          "voices": [
            {
              "positions": [
                { "slot": 2, "duration_type": 4, "notes": [{ "string": 1, "fret": 3 }] },
                { "slot": 7, "duration_type": 8, "dotted": true },
                { "slot": 9, "duration_type": 16, "rest": true }
              ]
            },
            { "positions": [] }
          ],
          "dynamics": [{ "slot": 7, "volume": "Mf" }]
        }
      ],
      "text_items": [{ "slot": 2, "contents": "intro" }],
      "directions": [{ "slot": 9, "symbols": ["Coda"] }]
    }
  ]
}"#;

#[test]
fn test_fixture_parses_with_defaults() {
    let score = Score::from_json(FIXTURE).expect("fixture should parse");
    let voice = &score.systems[0].staves[0].voices[0];

    assert_eq!(voice.positions.len(), 3);
    assert_eq!(voice.positions[1].duration_type, DurationType::Eighth);
    assert!(voice.positions[1].dotted);
    assert!(voice.positions[2].rest);
    assert!(score.systems[0].chords.is_empty());
    assert!(score.validate().is_ok());
}

#[test]
fn test_polish_fixture_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("score.json");
    fs::write(&path, FIXTURE).unwrap();

    let json = fs::read_to_string(&path).unwrap();
    let polished = polish_score_json(&json, &PolishSettings::default()).unwrap();
    fs::write(&path, &polished).unwrap();

    let score = Score::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    let system = &score.systems[0];
    let slots: Vec<i32> = system.staves[0].voices[0].positions.iter().map(|p| p.slot).collect();

    // quarter (2 slots), dotted eighth (1), sixteenth (1)
    assert_eq!(slots, vec![0, 2, 3]);
    assert_eq!(system.barlines[1].slot, 4);
    assert_eq!(system.text_items[0].slot, 0);
    assert_eq!(system.staves[0].dynamics[0].slot, 2);
    assert_eq!(system.directions[0].slot, 3);
    assert_eq!(system.barlines[1].repeat_count, 2);
}

#[test]
fn test_invalid_fixture_is_rejected() {
    let mut score = Score::from_json(FIXTURE).unwrap();
    score.systems[0].staves[0].voices[0].positions[2].slot = 7;

    let err = polish_score(score, &PolishSettings::default()).unwrap_err();
    assert!(matches!(err, ScoreError::UnsortedPositions { previous: 7, slot: 7, .. }));
}
