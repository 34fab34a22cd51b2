//! Snapshot record: the persisted copy of bird, pipe and score

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::DecodeError;
use crate::consts::{BIRD_X, FRAME_COUNT};
use crate::sim::{Bird, GamePhase, GameState, Pipe};

/// Value copy of the persisted part of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Bird")]
    pub bird: Bird,
    #[serde(rename = "Pipe")]
    pub pipe: Pipe,
    #[serde(rename = "Score")]
    pub score: u64,
}

impl Snapshot {
    /// Copy the persisted fields out of a live state
    pub fn capture(state: &GameState) -> Self {
        Self {
            bird: state.bird.clone(),
            pipe: state.pipe.clone(),
            score: state.score,
        }
    }

    /// Overwrite the live state with this snapshot and resume play.
    ///
    /// The bird is pinned to its fixed column whatever the file says. Its
    /// frame is adapted to the state's variant: animated games start a
    /// missing frame at 0, plain games drop it.
    pub fn restore(self, state: &mut GameState) {
        let mut bird = self.bird;
        bird.pos.x = BIRD_X;
        bird.frame = if state.is_animated() {
            bird.frame.or(Some(0))
        } else {
            None
        };
        state.bird = bird;
        state.pipe = self.pipe;
        state.score = self.score;
        state.phase = GamePhase::Playing;
        state.game_over_reason = None;
    }

    /// Pretty JSON with a single-space indent
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
        self.serialize(&mut ser)?;
        Ok(out)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        let snapshot: Self = serde_json::from_slice(bytes)?;
        if let Some(frame) = snapshot.bird.frame {
            if frame >= FRAME_COUNT {
                return Err(DecodeError::FrameOutOfRange {
                    frame,
                    frame_count: FRAME_COUNT,
                });
            }
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::sim::GameOverReason;
    use proptest::prelude::*;
    use serde_json::Value;

    #[test]
    fn test_field_layout() {
        let state = GameState::new(5, true);
        let json = Snapshot::capture(&state).to_json().unwrap();
        let text = String::from_utf8(json.clone()).unwrap();
        assert!(text.starts_with("{\n \"Bird\": {\n  \"Position\": {\n   \"X\": 100.0,"));

        let value: Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["Bird"]["Position"]["X"], 100.0);
        assert_eq!(value["Bird"]["Position"]["Y"], 225.0);
        assert_eq!(value["Bird"]["Speed"], 0.0);
        assert_eq!(value["Bird"]["Frame"], 0);
        assert_eq!(value["Pipe"]["Position"]["X"], 800.0);
        assert!(value["Pipe"]["GapY"].is_f64());
        assert_eq!(value["Score"], 0);
    }

    #[test]
    fn test_plain_variant_omits_frame() {
        let state = GameState::new(5, false);
        let json = Snapshot::capture(&state).to_json().unwrap();
        let value: Value = serde_json::from_slice(&json).unwrap();
        assert!(value["Bird"].get("Frame").is_none());
    }

    #[test]
    fn test_reads_integer_coordinates() {
        let text = r#"{
 "Bird": {"Position": {"X": 100, "Y": 225}, "Speed": -12.5, "Frame": 7},
 "Pipe": {"Position": {"X": 640, "Y": 0}, "GapY": 300},
 "Score": 4
}"#;
        let snapshot = Snapshot::from_json(text.as_bytes()).unwrap();
        assert_eq!(snapshot.bird.pos.y, 225.0);
        assert_eq!(snapshot.bird.speed, -12.5);
        assert_eq!(snapshot.bird.frame, Some(7));
        assert_eq!(snapshot.pipe.gap_y, 300.0);
        assert_eq!(snapshot.score, 4);
    }

    #[test]
    fn test_rejects_bad_frame() {
        let text = r#"{"Bird": {"Position": {"X": 100, "Y": 225}, "Speed": 0, "Frame": 8},
 "Pipe": {"Position": {"X": 640, "Y": 0}, "GapY": 300}, "Score": 0}"#;
        assert!(matches!(
            Snapshot::from_json(text.as_bytes()),
            Err(DecodeError::FrameOutOfRange { frame: 8, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_score() {
        let text = r#"{"Bird": {"Position": {"X": 100, "Y": 225}, "Speed": 0},
 "Pipe": {"Position": {"X": 640, "Y": 0}, "GapY": 300}, "Score": -1}"#;
        assert!(matches!(
            Snapshot::from_json(text.as_bytes()),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_round_trip_any_phase() {
        let mut state = GameState::new(11, true);
        state.bird.pos.y = 33.25;
        state.bird.speed = 120.5;
        state.bird.frame = Some(6);
        state.pipe.pos.x = 401.5;
        state.score = 9;
        state.end_run(GameOverReason::PipeCollision);

        let bytes = Snapshot::capture(&state).to_json().unwrap();
        let mut restored = GameState::new(99, true);
        Snapshot::from_json(&bytes).unwrap().restore(&mut restored);

        assert_eq!(restored.bird, state.bird);
        assert_eq!(restored.pipe, state.pipe);
        assert_eq!(restored.score, state.score);
        assert_eq!(restored.phase, GamePhase::Playing);
        assert_eq!(restored.game_over_reason, None);
    }

    #[test]
    fn test_reads_scores_past_u32() {
        let text = r#"{"Bird": {"Position": {"X": 100, "Y": 225}, "Speed": 0},
 "Pipe": {"Position": {"X": 640, "Y": 0}, "GapY": 300}, "Score": 4294967296}"#;
        let snapshot = Snapshot::from_json(text.as_bytes()).unwrap();
        assert_eq!(snapshot.score, 4_294_967_296);
    }

    #[test]
    fn test_restore_pins_bird_column() {
        let text = r#"{"Bird": {"Position": {"X": 500, "Y": 200}, "Speed": 0},
 "Pipe": {"Position": {"X": 640, "Y": 0}, "GapY": 300}, "Score": 0}"#;
        let mut state = GameState::new(4, false);
        Snapshot::from_json(text.as_bytes())
            .unwrap()
            .restore(&mut state);
        assert_eq!(state.bird.pos.x, BIRD_X);
        assert_eq!(state.bird.pos.y, 200.0);
    }

    #[test]
    fn test_restore_adapts_frame() {
        let plain = Snapshot::capture(&GameState::new(1, false));
        let mut animated = GameState::new(2, true);
        plain.clone().restore(&mut animated);
        assert_eq!(animated.bird.frame, Some(0));

        let mut framed = plain;
        framed.bird.frame = Some(4);
        let mut state = GameState::new(3, false);
        framed.restore(&mut state);
        assert_eq!(state.bird.frame, None);
    }

    proptest! {
        #[test]
        fn prop_round_trip_restores_persisted_fields(
            y in 0.0f32..=SCREEN_HEIGHT,
            speed in -1000.0f32..1000.0,
            pipe_x in -PIPE_WIDTH..=SCREEN_WIDTH,
            gap_y in (PIPE_GAP / 2.0)..=(SCREEN_HEIGHT - PIPE_GAP / 2.0),
            score in any::<u64>(),
            frame in 0..FRAME_COUNT,
            game_over in any::<bool>(),
        ) {
            let mut state = GameState::new(21, true);
            state.bird.pos.y = y;
            state.bird.speed = speed;
            state.bird.frame = Some(frame);
            state.pipe.pos.x = pipe_x;
            state.pipe.gap_y = gap_y;
            state.score = score;
            if game_over {
                state.end_run(GameOverReason::OutOfBounds);
            }

            let bytes = Snapshot::capture(&state).to_json().unwrap();
            let mut restored = GameState::new(22, true);
            Snapshot::from_json(&bytes).unwrap().restore(&mut restored);

            prop_assert_eq!(&restored.bird, &state.bird);
            prop_assert_eq!(&restored.pipe, &state.pipe);
            prop_assert_eq!(restored.score, state.score);
            prop_assert_eq!(restored.phase, GamePhase::Playing);
        }
    }
}
