use std::sync::Arc;

use services::PredictionApi;

/// Capabilities the UI needs from the hosting application. Implemented by
/// the composition root (`crates/app`) and by test doubles.
pub trait UiApp: Send + Sync {
    fn predictions(&self) -> Arc<dyn PredictionApi>;
}

#[derive(Clone)]
pub struct AppContext {
    predictions: Arc<dyn PredictionApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            predictions: app.predictions(),
        }
    }

    #[must_use]
    pub fn predictions(&self) -> Arc<dyn PredictionApi> {
        Arc::clone(&self.predictions)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
