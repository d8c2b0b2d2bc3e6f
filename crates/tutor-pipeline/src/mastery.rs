// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-subject mastery scoring.
//!
//! A message nudges the learner's mastery of its subject up or down based on
//! how hard the request was and how the learner sounded. Storing the level
//! is the caller's job; these functions only compute it.

use serde::Serialize;
use tutor_core::{ClassificationResult, Difficulty, Emotion};

/// Lower bound of a mastery level.
pub const MASTERY_MIN: f64 = 0.0;

/// Upper bound of a mastery level.
pub const MASTERY_MAX: f64 = 1.0;

/// Signed change to apply to the subject's mastery for this message.
///
/// Asking for harder material lowers the estimate slightly, asking for
/// beginner material raises it. Confidence raises it, frustration and
/// confusion lower it.
pub fn mastery_delta(classification: &ClassificationResult) -> f64 {
    let from_difficulty = match classification.difficulty {
        Difficulty::Advanced => -0.02,
        Difficulty::Intermediate => -0.01,
        Difficulty::Beginner => 0.01,
    };
    let from_emotion = match classification.emotion {
        Emotion::Confident => 0.02,
        Emotion::Frustrated => -0.02,
        Emotion::Confused => -0.01,
        Emotion::Curious | Emotion::Neutral => 0.0,
    };
    from_difficulty + from_emotion
}

/// Applies `delta` to `level`, keeping the result within [0, 1].
pub fn apply_mastery(level: f64, delta: f64) -> f64 {
    (level + delta).clamp(MASTERY_MIN, MASTERY_MAX)
}

/// One subject's mastery before and after a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasteryUpdate {
    pub subject: String,
    pub previous: f64,
    pub delta: f64,
    pub level: f64,
}

impl MasteryUpdate {
    /// Scores `classification` against the learner's `previous` level.
    pub fn compute(classification: &ClassificationResult, previous: f64) -> Self {
        let delta = mastery_delta(classification);
        Self {
            subject: classification.subject.clone(),
            previous,
            delta,
            level: apply_mastery(previous, delta),
        }
    }
}
