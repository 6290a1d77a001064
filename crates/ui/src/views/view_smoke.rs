use dioxus::prelude::*;
use forecast_core::model::{DrillCatalog, TrainingCategory};

use super::drills::TrainingDrillsProps;
use super::forecast::{ResultsSection, ResultsSectionProps};
use super::test_harness::{ScriptedPredictions, drive_dom, setup_view_harness};
use super::TrainingDrills;

#[tokio::test(flavor = "current_thread")]
async fn forecast_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ScriptedPredictions::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Years of playing billiards"), "missing label in {html}");
    assert!(html.contains("Drill Scores"), "missing drills section in {html}");
    assert!(html.contains("Predict FargoRate"), "missing fargo button in {html}");
    assert!(html.contains("Make a prediction"), "missing submit in {html}");
    assert!(
        html.contains("Current drill total: 0"),
        "missing derived total in {html}"
    );
    // No results and no errors before the first submission.
    assert!(!html.contains("Your Personal Analysis"), "premature results in {html}");
    assert_eq!(harness.predictions.fargo_calls(), 0);
    assert_eq!(harness.predictions.skill_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn training_drills_smoke_renders_sections_with_hours() {
    let mut dom = VirtualDom::new_with_props(
        TrainingDrills,
        TrainingDrillsProps {
            catalog: DrillCatalog::standard(),
            // current level 4.0 resolves to the intermediate tier
            forecast: ScriptedPredictions::sample_forecast(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(
        html.contains("Ball Pocketing - Intermediate Level Drills - 2.5 Hours"),
        "missing section heading in {html}"
    );
    assert!(
        html.contains("Cue Ball Control - Intermediate Level Drills - 1 Hours"),
        "missing section heading in {html}"
    );
    assert!(
        html.contains("/assets/images/Ball_Pocketing_Intermediate_1.png"),
        "missing image source in {html}"
    );
    assert!(
        html.contains("Pattern Play training drill for intermediate level players."),
        "missing card description in {html}"
    );
    assert!(!html.contains("Beginner"), "wrong tier rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn training_drills_smoke_omits_empty_categories() {
    static SPARSE: &[TrainingCategory] = &[
        TrainingCategory::new(
            "Safety_Play",
            "Safety Play",
            &[],
            &["Safety_Play_Intermediate_1.png"],
            &[],
        ),
        TrainingCategory::new(
            "Breaking",
            "Breaking",
            &["Breaking_Beginner_1.png"],
            &[],
            &[],
        ),
    ];

    let mut forecast = ScriptedPredictions::sample_forecast();
    forecast.current_skill_level = 2.0;

    let mut dom = VirtualDom::new_with_props(
        TrainingDrills,
        TrainingDrillsProps {
            catalog: DrillCatalog::from_categories(SPARSE),
            forecast,
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Breaking - Beginner Level Drills"), "missing section in {html}");
    // Safety Play has no beginner images, so no section at all.
    assert!(!html.contains("Safety Play"), "empty category rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_section_smoke_renders_response_verbatim() {
    let mut dom = VirtualDom::new_with_props(
        ResultsSection,
        ResultsSectionProps {
            forecast: ScriptedPredictions::sample_forecast(),
            bu_total: "36".to_string(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Your Personal Analysis"), "missing title in {html}");
    assert!(html.contains("Total BU Drills Score:"), "missing total in {html}");
    assert!(html.contains("36"), "missing total value in {html}");
    assert!(html.contains(" / 10"), "missing level unit in {html}");
    assert!(html.contains(" level(s)"), "missing improvement unit in {html}");
    assert!(
        html.contains("Keep practicing pattern play."),
        "missing message in {html}"
    );
}
