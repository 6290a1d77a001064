use std::collections::HashSet;

use dioxus::prelude::*;
use forecast_core::model::{
    DrillCatalog, SkillForecast, SkillTier, image_path, PLACEHOLDER_IMAGE,
};

/// Recommended training exercises for the forecast skill level: one
/// section per category that has images for the resolved tier, one card
/// per image. Categories without images for the tier are omitted.
#[component]
pub fn TrainingDrills(catalog: DrillCatalog, forecast: SkillForecast) -> Element {
    let tier = SkillTier::classify(forecast.current_skill_level);
    // Filenames whose asset failed to load; each renders the placeholder
    // from then on. One-time substitution, no retry chain.
    let failed = use_signal(HashSet::<String>::new);

    let sections = catalog
        .sections_for(tier)
        .map(|(category, images)| {
            let hours = format_hours(forecast.hours_for(category.name()));
            let display_name = category.display_name();
            let cards = images.iter().enumerate().map(move |(index, filename)| {
                rsx! {
                    DrillCard {
                        key: "{filename}",
                        filename: filename.to_string(),
                        category_name: display_name,
                        tier,
                        ordinal: index + 1,
                        failed,
                    }
                }
            });
            rsx! {
                div { class: "exercise-content",
                    h3 { class: "exercise-title",
                        "{display_name} - {tier} Level Drills - {hours} Hours"
                    }
                    div { class: "exercise-grid", {cards} }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "training-section",
            h2 { class: "training-title", "Recommended Training Exercises" }
            p { class: "training-subtitle",
                "Based on your skill level, here are some drills to practice"
            }
            {sections.into_iter()}
        }
    }
}

#[component]
fn DrillCard(
    filename: String,
    category_name: &'static str,
    tier: SkillTier,
    ordinal: usize,
    failed: Signal<HashSet<String>>,
) -> Element {
    let src = resolve_src(&filename, &failed());
    let alt = format!("{category_name} {tier} Drill {ordinal}");
    let description = format!(
        "{category_name} training drill for {} level players.",
        tier.label().to_lowercase()
    );
    let error_key = filename.clone();

    rsx! {
        div { class: "exercise-card",
            div { class: "exercise-image-wrapper",
                img {
                    class: "exercise-image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: move |_| {
                        let mut failed = failed;
                        failed.with_mut(|set| {
                            set.insert(error_key.clone());
                        });
                    },
                }
            }
            div { class: "exercise-info",
                h4 { class: "exercise-card-title", "Drill {ordinal}" }
                p { class: "exercise-description", "{description}" }
            }
        }
    }
}

/// Asset path for a drill image, swapped to the placeholder after the
/// first load failure.
fn resolve_src(filename: &str, failed: &HashSet<String>) -> String {
    if failed.contains(filename) {
        image_path(PLACEHOLDER_IMAGE)
    } else {
        image_path(filename)
    }
}

fn format_hours(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
