use std::sync::Arc;

use dioxus::prelude::*;
use forecast_core::model::{DrillCatalog, FormField, PlayerForm, SkillForecast};

use crate::context::AppContext;
use crate::views::TrainingDrills;

use super::actions;

/// The forecast form. Owns all input state and the two independent
/// request flows (FargoRate prediction, skill submission); the flows may
/// overlap in flight and neither blocks or clears the other. At most one
/// error message is shown, overwritten by the latest failing operation.
#[component]
pub fn ForecastView() -> Element {
    let ctx = use_context::<AppContext>();
    let form = use_signal(PlayerForm::default);
    let forecast = use_signal(|| None::<SkillForecast>);
    let submitting = use_signal(|| false);
    let predicting_fargo = use_signal(|| false);
    let error = use_signal(|| None::<String>);
    let catalog = use_hook(DrillCatalog::standard);

    let on_predict_fargo = {
        let predictions = ctx.predictions();
        use_callback(move |()| {
            let predictions = Arc::clone(&predictions);
            let form = form;
            let mut predicting_fargo = predicting_fargo;
            let mut error = error;
            spawn(async move {
                predicting_fargo.set(true);
                error.set(None);
                let current = form();
                match actions::predict_fargo(predictions.as_ref(), &current).await {
                    Ok(rate) => {
                        let mut form = form;
                        form.with_mut(|form| form.apply_fargo_estimate(rate));
                    }
                    Err(message) => error.set(Some(message)),
                }
                predicting_fargo.set(false);
            });
        })
    };

    let on_submit = {
        let predictions = ctx.predictions();
        use_callback(move |evt: FormEvent| {
            evt.prevent_default();
            let predictions = Arc::clone(&predictions);
            let form = form;
            let mut submitting = submitting;
            let mut error = error;
            let mut forecast = forecast;
            spawn(async move {
                submitting.set(true);
                error.set(None);
                forecast.set(None);
                let current = form();
                match actions::submit_skill(predictions.as_ref(), &current).await {
                    Ok(result) => forecast.set(Some(result)),
                    Err(message) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    rsx! {
        div { class: "page forecast-page",
            div { class: "form-section",
                form { onsubmit: move |evt| on_submit.call(evt),
                    div { class: "form-grid",
                        {number_field(form, FormField::YearsOfExperience, "Years of playing billiards", "e.g. 5", None, None, None)}
                        {number_field(form, FormField::YearsOfTournamentExperience, "Years of tournament experience", "e.g. 2", None, None, None)}
                        {number_field(form, FormField::WinPercentage, "% Tournament wins", "e.g. 65", Some("0"), Some("100"), None)}
                        {number_field(form, FormField::PracticeHoursPerWeek, "Practice hours per week", "e.g. 8", Some("0"), Some("60"), None)}
                        {number_field(form, FormField::TableDifficulty, "Table difficulty (0.9-1.1)", "0.9 - 1.1", Some("0.90"), Some("1.10"), Some("0.01"))}
                        {mental_drills_field(form)}
                        {fargorate_field(form)}
                        button {
                            class: "predict-fargo-button",
                            r#type: "button",
                            disabled: predicting_fargo(),
                            onclick: move |_| on_predict_fargo.call(()),
                            if predicting_fargo() { "Predicting..." } else { "Predict FargoRate" }
                        }
                    }

                    h3 { class: "section-title", "Drill Scores" }
                    div { class: "form-grid",
                        {number_field(form, FormField::BuDrill1, "BU Drill 1 (max 10)", "max 10", Some("0"), Some("10"), None)}
                        {number_field(form, FormField::BuDrill2, "BU Drill 2 (max 10)", "max 10", Some("0"), Some("10"), None)}
                        {number_field(form, FormField::BuDrill3, "BU Drill 3 (max 10)", "max 10", Some("0"), Some("10"), None)}
                        {number_field(form, FormField::BuDrill4, "BU Drill 4 (max 10)", "max 10", Some("0"), Some("10"), None)}
                        {number_field(form, FormField::BuDrill5, "BU Drill 5 (max 10)", "max 10", Some("0"), Some("10"), None)}
                        {number_field(form, FormField::BuDrill6, "BU Drill 6 (max 10)", "max 10", Some("0"), Some("10"), None)}
                        {number_field(form, FormField::BuDrill7, "BU Drill 7 (max 20)", "max 20", Some("0"), Some("20"), None)}
                        {number_field(form, FormField::BuDrill8, "BU Drill 8 (max 20)", "max 20", Some("0"), Some("20"), None)}
                    }
                    p { class: "drill-total", "Current drill total: {form().bu_total()}" }

                    div { class: "button-wrapper",
                        button {
                            class: "submit-button",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Analyzing..." } else { "Make a prediction" }
                        }
                    }
                }
            }

            if submitting() || predicting_fargo() {
                div { class: "loading-container",
                    div { class: "spinner" }
                    p { class: "loading-text",
                        if submitting() {
                            "Please wait. The model is processing your data..."
                        } else {
                            "Predicting Fargo Rate..."
                        }
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "error-box", "{message}" }
            }

            if let Some(result) = forecast() {
                ResultsSection { forecast: result.clone(), bu_total: form().bu_total().to_string() }
                TrainingDrills { catalog: catalog.clone(), forecast: result }
            }
        }
    }
}

/// The analysis cards rendered after a successful submission. Values come
/// from the backend response verbatim.
#[component]
pub(crate) fn ResultsSection(forecast: SkillForecast, bu_total: String) -> Element {
    rsx! {
        section { class: "results-section",
            h2 { class: "results-title", "Your Personal Analysis" }
            h2 { class: "results-title",
                "Total BU Drills Score: "
                span { class: "results-total", "{bu_total}" }
            }
            div { class: "results-grid",
                div { class: "result-card",
                    h3 { class: "card-title", "Current Skill Level" }
                    p { class: "result-value",
                        "{forecast.current_skill_level}"
                        span { class: "result-unit", " / 10" }
                    }
                }
                div { class: "result-card",
                    h3 { class: "card-title", "Projected Improvement" }
                    p { class: "result-value",
                        "{forecast.projected_improvement}"
                        span { class: "result-unit", " level(s)" }
                    }
                }
                div { class: "result-card result-card-wide",
                    h3 { class: "card-title", "Personalized Message" }
                    p { class: "result-message", "{forecast.message}" }
                }
            }
        }
    }
}

fn number_field(
    mut form: Signal<PlayerForm>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    min: Option<&'static str>,
    max: Option<&'static str>,
    step: Option<&'static str>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{field.name()}", "{label}" }
            input {
                class: "form-input",
                id: "{field.name()}",
                name: "{field.name()}",
                r#type: "number",
                min,
                max,
                step,
                value: "{form().value(field)}",
                placeholder,
                oninput: move |evt| form.with_mut(|form| form.set(field, evt.value())),
            }
        }
    }
}

fn mental_drills_field(mut form: Signal<PlayerForm>) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "mental_drills", "Mental Drills (0=No, 1=Yes)" }
            select {
                class: "form-input",
                id: "mental_drills",
                name: "mental_drills",
                value: "{form().value(FormField::MentalDrills)}",
                onchange: move |evt| form.with_mut(|form| form.set(FormField::MentalDrills, evt.value())),
                option { value: "0", "0 (No)" }
                option { value: "1", "1 (Yes)" }
            }
        }
    }
}

fn fargorate_field(mut form: Signal<PlayerForm>) -> Element {
    let enabled = form().use_fargorate();
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "fargorate", "FargoRate Rating" }
            div { class: "fargo-input-group",
                input {
                    class: if enabled { "form-input" } else { "form-input form-input-disabled" },
                    id: "fargorate",
                    name: "fargorate",
                    r#type: "number",
                    min: "0",
                    max: "900",
                    step: "0.1",
                    value: "{form().value(FormField::Fargorate)}",
                    placeholder: "Enter rating",
                    disabled: !enabled,
                    oninput: move |evt| form.with_mut(|form| form.set(FormField::Fargorate, evt.value())),
                }
                label { class: "fargo-opt-in",
                    input {
                        r#type: "checkbox",
                        checked: enabled,
                        onchange: move |evt| form.with_mut(|form| form.set_use_fargorate(evt.checked())),
                    }
                    span { "Use FargoRate" }
                }
            }
        }
    }
}
