//! Analysis result wire types returned by the remote backend.
//!
//! Field names follow the backend's JSON responses verbatim; the session
//! store persists the body-analysis result in the same shape it arrived in.

use serde::{Deserialize, Serialize};

/// Body composition analysis produced by the onboarding submission.
///
/// Overwritten on each re-submission, cleared on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub estimated_fat_percentage: f64,
    pub estimated_biotype: String,
    pub suggested_goal: String,
    pub feedback: String,
}

/// Macronutrient estimate in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Result of a meal photo analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysisResult {
    pub total_calories: f64,
    pub macros: Macros,
    pub feedback: String,
    pub meal_type: String,
}

/// A single exercise within a generated workout plan.
///
/// Either `reps` or `duration` is present depending on the exercise kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub tips: String,
}

/// A generated workout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlanResult {
    pub title: String,
    pub focus: String,
    pub exercises: Vec<WorkoutExercise>,
    pub feedback: String,
}
