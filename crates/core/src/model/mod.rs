mod catalog;
mod form;
mod prediction;
mod skill;

pub use catalog::{DrillCatalog, TrainingCategory, image_path, PLACEHOLDER_IMAGE};
pub use form::{FormField, PlayerForm};
pub use prediction::{FargoRequest, SkillForecast, SkillRequest};
pub use skill::SkillTier;
