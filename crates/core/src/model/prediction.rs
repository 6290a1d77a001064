use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /predict_fargo_lr`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FargoRequest {
    pub years_of_experience_playing: f64,
    pub years_of_tournament_experience: f64,
    /// Tournament win rate as a fraction, not a percentage.
    pub win_pct_tournaments: f64,
    pub bu_drill_1: f64,
    pub bu_drill_2: f64,
    pub bu_drill_3: f64,
    pub bu_drill_4: f64,
    pub bu_drill_5: f64,
    pub bu_drill_6: f64,
    pub bu_drill_7: f64,
    pub bu_drill_8: f64,
    pub bu_total: f64,
    pub table_difficulty_total: f64,
    pub mental_drills: i64,
}

/// Request body for `POST /calculate_skill`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillRequest {
    pub fargorate: f64,
    pub bu_total: f64,
    /// Tournament win rate as a fraction, not a percentage.
    pub win_percentage: f64,
    pub years_of_experience: f64,
    pub bu_drill_2: f64,
    pub bu_drill_6: f64,
    pub bu_drill_7: f64,
    pub bu_drill_8: f64,
    pub practice_hours_per_week: f64,
    pub years_of_tournament_experience: f64,
    pub table_difficulty_total: f64,
    pub mental_drills: i64,
}

/// Successful `/calculate_skill` response. Replaced wholesale by the next
/// successful submission, never mutated in place.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillForecast {
    pub current_skill_level: f64,
    pub projected_skill_level: f64,
    pub projected_improvement: f64,
    pub message: String,
    /// Suggested weekly practice hours keyed by training-category name.
    pub recommended_hours: HashMap<String, f64>,
}

impl SkillForecast {
    /// Recommended hours for a category; categories the backend did not
    /// score show as zero.
    #[must_use]
    pub fn hours_for(&self, category: &str) -> f64 {
        self.recommended_hours.get(category).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fargo_request_serializes_wire_field_names() {
        let payload = FargoRequest {
            years_of_experience_playing: 5.0,
            years_of_tournament_experience: 2.0,
            win_pct_tournaments: 0.65,
            bu_drill_1: 1.0,
            bu_drill_2: 2.0,
            bu_drill_3: 3.0,
            bu_drill_4: 4.0,
            bu_drill_5: 5.0,
            bu_drill_6: 6.0,
            bu_drill_7: 7.0,
            bu_drill_8: 8.0,
            bu_total: 36.0,
            table_difficulty_total: 1.05,
            mental_drills: 1,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["years_of_experience_playing"], 5.0);
        assert_eq!(json["win_pct_tournaments"], 0.65);
        assert_eq!(json["bu_drill_8"], 8.0);
        assert_eq!(json["table_difficulty_total"], 1.05);
        assert_eq!(json["mental_drills"], 1);
        assert_eq!(json.as_object().unwrap().len(), 14);
    }

    #[test]
    fn skill_request_serializes_wire_field_names() {
        let payload = SkillRequest {
            fargorate: 512.0,
            bu_total: 36.0,
            win_percentage: 0.65,
            years_of_experience: 5.0,
            bu_drill_2: 2.0,
            bu_drill_6: 6.0,
            bu_drill_7: 7.0,
            bu_drill_8: 8.0,
            practice_hours_per_week: 8.0,
            years_of_tournament_experience: 2.0,
            table_difficulty_total: 1.0,
            mental_drills: 0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fargorate"], 512.0);
        assert_eq!(json["win_percentage"], 0.65);
        assert_eq!(json["practice_hours_per_week"], 8.0);
        assert_eq!(json.as_object().unwrap().len(), 12);
    }

    #[test]
    fn forecast_deserializes_backend_response() {
        let forecast: SkillForecast = serde_json::from_str(
            r#"{
                "current_skill_level": 4,
                "projected_skill_level": 6,
                "projected_improvement": 2,
                "message": "Keep practicing pattern play.",
                "recommended_hours": {
                    "Ball_Pocketing": 2.5,
                    "Pattern_Play": 1.0
                }
            }"#,
        )
        .unwrap();
        assert_eq!(forecast.current_skill_level, 4.0);
        assert_eq!(forecast.projected_improvement, 2.0);
        assert_eq!(forecast.hours_for("Ball_Pocketing"), 2.5);
        assert_eq!(forecast.hours_for("Cue_Ball_Control"), 0.0);
    }
}
