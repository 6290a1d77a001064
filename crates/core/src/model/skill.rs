use std::fmt;

/// Three-bucket classification of the 0-10 skill level returned by the
/// prediction backend. Buckets pick which drill images to recommend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillTier {
    /// Classifies a numeric skill level. Boundaries are inclusive of the
    /// lower bucket: `<= 3` is Beginner, `<= 6` is Intermediate.
    #[must_use]
    pub fn classify(level: f64) -> Self {
        if level <= 3.0 {
            SkillTier::Beginner
        } else if level <= 6.0 {
            SkillTier::Intermediate
        } else {
            SkillTier::Advanced
        }
    }

    /// Display label, also used as the catalog lookup key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillTier::Beginner => "Beginner",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
