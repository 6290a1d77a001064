//! The two request flows behind the forecast form, kept free of signals so
//! they can be exercised against a scripted `PredictionApi`.

use forecast_core::model::{PlayerForm, SkillForecast};
use services::PredictionApi;

/// Runs the FargoRate prediction for the current form state.
///
/// Validation happens before any network call: when required fields are
/// empty the error names them and the client is never touched. Failures
/// collapse to the single user-visible message string.
pub(super) async fn predict_fargo(
    predictions: &dyn PredictionApi,
    form: &PlayerForm,
) -> Result<f64, String> {
    let request = form.fargo_request().map_err(|err| err.to_string())?;
    predictions
        .predict_fargo(&request)
        .await
        .map_err(|err| err.user_message())
}

/// Submits the skill-prediction request for the current form state.
pub(super) async fn submit_skill(
    predictions: &dyn PredictionApi,
    form: &PlayerForm,
) -> Result<SkillForecast, String> {
    predictions
        .calculate_skill(&form.skill_request())
        .await
        .map_err(|err| err.user_message())
}
