use super::skill::SkillTier;

/// Root path drill images are served from.
const IMAGE_BASE_PATH: &str = "/assets/images";

/// Universal fallback asset for drill images that fail to load.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Resolves a catalog filename to its asset path.
#[must_use]
pub fn image_path(filename: &str) -> String {
    format!("{IMAGE_BASE_PATH}/{filename}")
}

/// A training category with one ordered image list per skill tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingCategory {
    name: &'static str,
    display_name: &'static str,
    beginner: &'static [&'static str],
    intermediate: &'static [&'static str],
    advanced: &'static [&'static str],
}

impl TrainingCategory {
    #[must_use]
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        beginner: &'static [&'static str],
        intermediate: &'static [&'static str],
        advanced: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            display_name,
            beginner,
            intermediate,
            advanced,
        }
    }

    /// Key used in the backend's `recommended_hours` mapping.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Image filenames for the given tier, possibly empty.
    #[must_use]
    pub fn images(&self, tier: SkillTier) -> &'static [&'static str] {
        match tier {
            SkillTier::Beginner => self.beginner,
            SkillTier::Intermediate => self.intermediate,
            SkillTier::Advanced => self.advanced,
        }
    }
}

/// Immutable category -> tier -> image lookup, built once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillCatalog {
    categories: &'static [TrainingCategory],
}

impl DrillCatalog {
    /// The standard four-category catalog shipped with the app.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_categories(STANDARD_CATEGORIES)
    }

    #[must_use]
    pub const fn from_categories(categories: &'static [TrainingCategory]) -> Self {
        Self { categories }
    }

    #[must_use]
    pub fn categories(&self) -> &[TrainingCategory] {
        self.categories
    }

    /// Categories paired with their image lists for the given tier.
    /// Categories with no images for that tier are omitted entirely.
    pub fn sections_for(
        &self,
        tier: SkillTier,
    ) -> impl Iterator<Item = (&TrainingCategory, &'static [&'static str])> {
        self.categories
            .iter()
            .map(move |category| (category, category.images(tier)))
            .filter(|(_, images)| !images.is_empty())
    }
}

impl Default for DrillCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_CATEGORIES: &[TrainingCategory] = &[
    TrainingCategory {
        name: "Ball_Pocketing",
        display_name: "Ball Pocketing",
        beginner: &[
            "Ball_Pocketing_Beginner_1.png",
            "Ball_Pocketing_Beginner_2.png",
            "Ball_Pocketing_Beginner_3.png",
        ],
        intermediate: &[
            "Ball_Pocketing_Intermediate_1.png",
            "Ball_Pocketing_Intermediate_2.png",
            "Ball_Pocketing_Intermediate_3.png",
        ],
        advanced: &[
            "Ball_Pocketing_Advanced_1.png",
            "Ball_Pocketing_Advanced_2.png",
            "Ball_Pocketing_Advanced_3.png",
        ],
    },
    TrainingCategory {
        name: "Cue_Ball_Control",
        display_name: "Cue Ball Control",
        beginner: &[
            "Cue_Ball_Control_Beginner_1.png",
            "Cue_Ball_Control_Beginner_2.png",
            "Cue_Ball_Control_Beginner_3.png",
        ],
        intermediate: &[
            "Cue_Ball_Control_Intermediate_1.png",
            "Cue_Ball_Control_Intermediate_2.png",
            "Cue_Ball_Control_Intermediate_3.png",
        ],
        advanced: &[
            "Cue_Ball_Control_Advanced_1.png",
            "Cue_Ball_Control_Advanced_2.png",
            "Cue_Ball_Control_Advanced_3.png",
        ],
    },
    TrainingCategory {
        name: "Pattern_Play",
        display_name: "Pattern Play",
        beginner: &[
            "Pattern_Play_Beginner_1.png",
            "Pattern_Play_Beginner_2.png",
            "Pattern_Play_Beginner_3.png",
        ],
        intermediate: &[
            "Pattern_Play_Intermediate_1.png",
            "Pattern_Play_Intermediate_2.png",
            "Pattern_Play_Intermediate_3.png",
        ],
        advanced: &[
            "Pattern_Play_Advanced_1.png",
            "Pattern_Play_Advanced_2.png",
            "Pattern_Play_Advanced_3.png",
        ],
    },
    TrainingCategory {
        name: "Stroke_Quality",
        display_name: "Stroke Quality",
        // The beginner set predates the current naming scheme.
        beginner: &[
            "Beginner_Stroke_Quality_1.png",
            "Beginner_Stroke_Quality_2.png",
            "Beginner_Stroke_Quality_3.png",
        ],
        intermediate: &[
            "Stroke_Quality_Intermediate_1.png",
            "Stroke_Quality_Intermediate_2.png",
            "Stroke_Quality_Intermediate_3.png",
        ],
        advanced: &[
            "Stroke_Quality_Advanced_1.png",
            "Stroke_Quality_Advanced_2.png",
            "Stroke_Quality_Advanced_3.png",
        ],
    },
];
