// src/models/stats.rs

use serde::Serialize;

/// Questions answered on one weekday.
#[derive(Debug, Serialize)]
pub struct DailyProgress {
    pub day: &'static str,
    pub questions: u32,
    pub correct: u32,
}

#[derive(Debug, Serialize)]
pub struct SubjectPerformance {
    pub subject: &'static str,
    pub total: u32,
    pub correct: u32,
    pub accuracy_percent: f64,
}

/// Performance dashboard payload. Sample data only.
#[derive(Debug, Serialize)]
pub struct Performance {
    pub total_questions: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub accuracy_percent: f64,
    pub average_time: f64,
    pub current_streak: u32,
    pub best_streak: u32,
    pub level: &'static str,
    pub total_points: u32,
    pub weekly_progress: Vec<DailyProgress>,
    pub by_subject: Vec<SubjectPerformance>,
}

impl Performance {
    pub fn sample() -> Self {
        let daily = |day: &'static str, questions: u32, correct: u32| DailyProgress { day, questions, correct };
        let subject = |subject: &'static str, total: u32, correct: u32, accuracy_percent: f64| SubjectPerformance {
            subject,
            total,
            correct,
            accuracy_percent,
        };

        Self {
            total_questions: 150,
            correct: 120,
            incorrect: 30,
            accuracy_percent: 80.0,
            average_time: 45.5,
            current_streak: 5,
            best_streak: 12,
            level: "Intermediate",
            total_points: 2450,
            weekly_progress: vec![
                daily("Mon", 15, 12),
                daily("Tue", 20, 16),
                daily("Wed", 18, 15),
                daily("Thu", 22, 18),
                daily("Fri", 25, 20),
            ],
            by_subject: vec![
                subject("SUS", 50, 42, 84.0),
                subject("Nursing", 60, 45, 75.0),
                subject("Public Health", 40, 33, 82.5),
            ],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankingEntry {
    pub position: u32,
    pub name: &'static str,
    pub points: u32,
    pub accuracy_percent: f64,
    /// Marks the caller's own row.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
}

/// Leaderboard payload. Sample data only.
#[derive(Debug, Serialize)]
pub struct Ranking {
    pub ranking: Vec<RankingEntry>,
    pub your_position: u32,
    pub total_users: u32,
}

impl Ranking {
    pub fn sample() -> Self {
        let entry = |position: u32, name: &'static str, points: u32, accuracy_percent: f64, highlight: bool| RankingEntry {
            position,
            name,
            points,
            accuracy_percent,
            highlight,
        };

        Self {
            ranking: vec![
                entry(1, "User***", 2850, 95.2, false),
                entry(2, "Student***", 2720, 92.8, false),
                entry(3, "Candidate***", 2650, 90.5, false),
                entry(4, "You", 2450, 80.0, true),
                entry(5, "Applicant***", 2380, 78.2, false),
            ],
            your_position: 4,
            total_users: 1247,
        }
    }
}
