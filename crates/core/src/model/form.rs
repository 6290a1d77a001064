use crate::error::FormError;

use super::prediction::{FargoRequest, SkillRequest};

/// Keys for the writable form inputs. Writes go through
/// [`PlayerForm::set`] so the drill-total invariant cannot be bypassed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    YearsOfExperience,
    YearsOfTournamentExperience,
    WinPercentage,
    PracticeHoursPerWeek,
    BuDrill1,
    BuDrill2,
    BuDrill3,
    BuDrill4,
    BuDrill5,
    BuDrill6,
    BuDrill7,
    BuDrill8,
    Fargorate,
    TableDifficulty,
    MentalDrills,
}

impl FormField {
    pub const DRILLS: [FormField; 8] = [
        FormField::BuDrill1,
        FormField::BuDrill2,
        FormField::BuDrill3,
        FormField::BuDrill4,
        FormField::BuDrill5,
        FormField::BuDrill6,
        FormField::BuDrill7,
        FormField::BuDrill8,
    ];

    /// Wire name of the field, as the backend and error messages spell it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FormField::YearsOfExperience => "years_of_experience",
            FormField::YearsOfTournamentExperience => "years_of_tournament_experience",
            FormField::WinPercentage => "win_percentage",
            FormField::PracticeHoursPerWeek => "practice_hours_per_week",
            FormField::BuDrill1 => "bu_drill_1",
            FormField::BuDrill2 => "bu_drill_2",
            FormField::BuDrill3 => "bu_drill_3",
            FormField::BuDrill4 => "bu_drill_4",
            FormField::BuDrill5 => "bu_drill_5",
            FormField::BuDrill6 => "bu_drill_6",
            FormField::BuDrill7 => "bu_drill_7",
            FormField::BuDrill8 => "bu_drill_8",
            FormField::Fargorate => "fargorate",
            FormField::TableDifficulty => "table_difficulty",
            FormField::MentalDrills => "mental_drills",
        }
    }

    #[must_use]
    pub fn is_drill(self) -> bool {
        Self::DRILLS.contains(&self)
    }
}

/// All input state for the forecast form, kept as raw text to mirror the
/// input controls. Numeric coercion happens only when payloads are built.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerForm {
    years_of_experience: String,
    years_of_tournament_experience: String,
    win_percentage: String,
    practice_hours_per_week: String,
    bu_drills: [String; 8],
    bu_total: String,
    fargorate: String,
    table_difficulty: String,
    mental_drills: String,
    use_fargorate: bool,
}

impl Default for PlayerForm {
    fn default() -> Self {
        Self {
            years_of_experience: String::new(),
            years_of_tournament_experience: String::new(),
            win_percentage: String::new(),
            practice_hours_per_week: String::new(),
            bu_drills: Default::default(),
            bu_total: "0".to_string(),
            fargorate: String::new(),
            table_difficulty: String::new(),
            mental_drills: "0".to_string(),
            use_fargorate: true,
        }
    }
}

impl PlayerForm {
    /// Writes a field value. A write to any drill field recomputes
    /// `bu_total` before returning.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::YearsOfExperience => self.years_of_experience = value,
            FormField::YearsOfTournamentExperience => {
                self.years_of_tournament_experience = value;
            }
            FormField::WinPercentage => self.win_percentage = value,
            FormField::PracticeHoursPerWeek => self.practice_hours_per_week = value,
            FormField::BuDrill1 => self.bu_drills[0] = value,
            FormField::BuDrill2 => self.bu_drills[1] = value,
            FormField::BuDrill3 => self.bu_drills[2] = value,
            FormField::BuDrill4 => self.bu_drills[3] = value,
            FormField::BuDrill5 => self.bu_drills[4] = value,
            FormField::BuDrill6 => self.bu_drills[5] = value,
            FormField::BuDrill7 => self.bu_drills[6] = value,
            FormField::BuDrill8 => self.bu_drills[7] = value,
            FormField::Fargorate => self.fargorate = value,
            FormField::TableDifficulty => self.table_difficulty = value,
            FormField::MentalDrills => self.mental_drills = value,
        }
        if field.is_drill() {
            self.bu_total = format_total(self.drill_total());
        }
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::YearsOfExperience => &self.years_of_experience,
            FormField::YearsOfTournamentExperience => &self.years_of_tournament_experience,
            FormField::WinPercentage => &self.win_percentage,
            FormField::PracticeHoursPerWeek => &self.practice_hours_per_week,
            FormField::BuDrill1 => &self.bu_drills[0],
            FormField::BuDrill2 => &self.bu_drills[1],
            FormField::BuDrill3 => &self.bu_drills[2],
            FormField::BuDrill4 => &self.bu_drills[3],
            FormField::BuDrill5 => &self.bu_drills[4],
            FormField::BuDrill6 => &self.bu_drills[5],
            FormField::BuDrill7 => &self.bu_drills[6],
            FormField::BuDrill8 => &self.bu_drills[7],
            FormField::Fargorate => &self.fargorate,
            FormField::TableDifficulty => &self.table_difficulty,
            FormField::MentalDrills => &self.mental_drills,
        }
    }

    /// The derived total as displayed text.
    #[must_use]
    pub fn bu_total(&self) -> &str {
        &self.bu_total
    }

    /// Sum of the eight drill fields; non-numeric or empty entries count
    /// as zero.
    #[must_use]
    pub fn drill_total(&self) -> f64 {
        self.bu_drills.iter().map(|raw| parse_or_zero(raw)).sum()
    }

    #[must_use]
    pub fn use_fargorate(&self) -> bool {
        self.use_fargorate
    }

    /// Toggles the FargoRate opt-in; opting out clears the stored rating.
    pub fn set_use_fargorate(&mut self, enabled: bool) {
        self.use_fargorate = enabled;
        if !enabled {
            self.fargorate.clear();
        }
    }

    /// Writes a backend-predicted rating and force-enables the opt-in.
    pub fn apply_fargo_estimate(&mut self, rate: f64) {
        self.fargorate = format_total(rate);
        self.use_fargorate = true;
    }

    /// Builds the `/predict_fargo_lr` payload.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingFields` naming every empty required
    /// field, in field order, without building a payload.
    pub fn fargo_request(&self) -> Result<FargoRequest, FormError> {
        let required: [(&'static str, &str); 14] = [
            ("years_of_experience", &self.years_of_experience),
            (
                "years_of_tournament_experience",
                &self.years_of_tournament_experience,
            ),
            ("win_percentage", &self.win_percentage),
            ("bu_drill_1", &self.bu_drills[0]),
            ("bu_drill_2", &self.bu_drills[1]),
            ("bu_drill_3", &self.bu_drills[2]),
            ("bu_drill_4", &self.bu_drills[3]),
            ("bu_drill_5", &self.bu_drills[4]),
            ("bu_drill_6", &self.bu_drills[5]),
            ("bu_drill_7", &self.bu_drills[6]),
            ("bu_drill_8", &self.bu_drills[7]),
            ("bu_total", &self.bu_total),
            ("table_difficulty", &self.table_difficulty),
            ("mental_drills", &self.mental_drills),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        Ok(FargoRequest {
            years_of_experience_playing: parse_or_zero(&self.years_of_experience),
            years_of_tournament_experience: parse_or_zero(&self.years_of_tournament_experience),
            win_pct_tournaments: parse_or_zero(&self.win_percentage) / 100.0,
            bu_drill_1: parse_or_zero(&self.bu_drills[0]),
            bu_drill_2: parse_or_zero(&self.bu_drills[1]),
            bu_drill_3: parse_or_zero(&self.bu_drills[2]),
            bu_drill_4: parse_or_zero(&self.bu_drills[3]),
            bu_drill_5: parse_or_zero(&self.bu_drills[4]),
            bu_drill_6: parse_or_zero(&self.bu_drills[5]),
            bu_drill_7: parse_or_zero(&self.bu_drills[6]),
            bu_drill_8: parse_or_zero(&self.bu_drills[7]),
            bu_total: parse_or_zero(&self.bu_total),
            table_difficulty_total: parse_or_zero(&self.table_difficulty),
            mental_drills: parse_or_zero(&self.mental_drills) as i64,
        })
    }

    /// Builds the `/calculate_skill` payload. When the FargoRate opt-in is
    /// off, `fargorate` is 0 regardless of the stored text. Table
    /// difficulty falls back to 1 and mental drills to 0 when absent or
    /// unparsable.
    #[must_use]
    pub fn skill_request(&self) -> SkillRequest {
        let fargorate = if self.use_fargorate {
            parse_or_zero(&self.fargorate)
        } else {
            0.0
        };
        let table_difficulty = parse_or_zero(&self.table_difficulty);
        SkillRequest {
            fargorate,
            bu_total: parse_or_zero(&self.bu_total),
            win_percentage: parse_or_zero(&self.win_percentage) / 100.0,
            years_of_experience: parse_or_zero(&self.years_of_experience),
            bu_drill_2: parse_or_zero(&self.bu_drills[1]),
            bu_drill_6: parse_or_zero(&self.bu_drills[5]),
            bu_drill_7: parse_or_zero(&self.bu_drills[6]),
            bu_drill_8: parse_or_zero(&self.bu_drills[7]),
            practice_hours_per_week: parse_or_zero(&self.practice_hours_per_week),
            years_of_tournament_experience: parse_or_zero(&self.years_of_tournament_experience),
            table_difficulty_total: if table_difficulty == 0.0 {
                1.0
            } else {
                table_difficulty
            },
            mental_drills: parse_or_zero(&self.mental_drills) as i64,
        }
    }
}

fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Formats a derived number the way the inputs display it: integral values
/// without a trailing `.0`.
fn format_total(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
