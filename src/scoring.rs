// src/scoring.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One answered exam item.
///
/// Deserialization never fails on a well-formed JSON object: missing or
/// mistyped fields fall back to defaults so the record is simply scored as
/// a miss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_choice: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub correct_choice: String,

    /// Seconds spent on the item. Always finite and non-negative.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub time_spent: f64,
}

impl AnsweredQuestion {
    pub fn new(user_choice: &str, correct_choice: &str, time_spent: f64) -> Self {
        Self {
            user_choice: user_choice.to_string(),
            correct_choice: correct_choice.to_string(),
            time_spent: sanitize_seconds(time_spent),
        }
    }

    /// Exact, case-sensitive match. Empty choices never match.
    pub fn is_correct(&self) -> bool {
        !self.correct_choice.is_empty() && self.user_choice == self.correct_choice
    }
}

/// Coarse qualitative bucket derived from the accuracy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Excellent,
    Good,
    Regular,
    NeedsImprovement,
}

impl Tier {
    /// Inclusive lower bounds at 80, 60 and 40.
    pub fn from_accuracy(accuracy_percent: f64) -> Self {
        if accuracy_percent >= 80.0 {
            Tier::Excellent
        } else if accuracy_percent >= 60.0 {
            Tier::Good
        } else if accuracy_percent >= 40.0 {
            Tier::Regular
        } else {
            Tier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Regular => "Regular",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Aggregate outcome of a scored exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub accuracy_percent: f64,
    pub average_time: f64,
    pub tier: Tier,
}

/// Scores a sequence of answered questions.
///
/// Total over all inputs: an empty slice yields zeros and
/// `Tier::NeedsImprovement`.
pub fn score(answers: &[AnsweredQuestion]) -> ScoreSummary {
    let total = answers.len();
    let correct = answers.iter().filter(|a| a.is_correct()).count();

    let (accuracy_percent, average_time) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            round2(correct as f64 / total as f64 * 100.0),
            round2(mean_seconds(answers)),
        )
    };

    ScoreSummary {
        total,
        correct,
        incorrect: total - correct,
        accuracy_percent,
        average_time,
        tier: Tier::from_accuracy(accuracy_percent),
    }
}

/// Converts a summary into the 0..=1000 point scale shown to users.
pub fn points(summary: &ScoreSummary) -> u32 {
    if summary.total == 0 {
        return 0;
    }
    (summary.correct as f64 / summary.total as f64 * 1000.0).floor() as u32
}

/// Sum of `time_spent`, saturating at `f64::MAX`.
pub fn total_seconds(answers: &[AnsweredQuestion]) -> f64 {
    answers
        .iter()
        .map(|a| a.time_spent)
        .sum::<f64>()
        .min(f64::MAX)
}

/// Mean of `time_spent` that stays finite when the plain sum overflows.
fn mean_seconds(answers: &[AnsweredQuestion]) -> f64 {
    let n = answers.len() as f64;
    let sum: f64 = answers.iter().map(|a| a.time_spent).sum();
    if sum.is_finite() {
        sum / n
    } else {
        answers.iter().map(|a| a.time_spent / n).sum::<f64>().min(f64::MAX)
    }
}

/// Rounds to two decimal places, exact ties to even.
///
/// Values too large to scale have no fractional digits and pass through.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 100.0
}

fn sanitize_seconds(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = Value::deserialize(deserializer)?.as_f64().unwrap_or(0.0);
    Ok(sanitize_seconds(seconds))
}
