use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use forecast_core::model::{FargoRequest, SkillForecast, SkillRequest};
use services::{PredictionApi, PredictionError, StatusCode};

use crate::context::{UiApp, build_app_context};
use crate::views::ForecastView;

/// Scripted `PredictionApi` double: canned responses plus call recording.
pub struct ScriptedPredictions {
    fargo: Result<f64, String>,
    skill: Result<SkillForecast, String>,
    fargo_requests: Mutex<Vec<FargoRequest>>,
    skill_requests: Mutex<Vec<SkillRequest>>,
}

impl Default for ScriptedPredictions {
    fn default() -> Self {
        Self {
            fargo: Ok(500.0),
            skill: Ok(Self::sample_forecast()),
            fargo_requests: Mutex::new(Vec::new()),
            skill_requests: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedPredictions {
    pub fn sample_forecast() -> SkillForecast {
        SkillForecast {
            current_skill_level: 4.0,
            projected_skill_level: 6.0,
            projected_improvement: 2.0,
            message: "Keep practicing pattern play.".to_string(),
            recommended_hours: [
                ("Ball_Pocketing".to_string(), 2.5),
                ("Cue_Ball_Control".to_string(), 1.0),
                ("Pattern_Play".to_string(), 3.0),
                ("Stroke_Quality".to_string(), 1.5),
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn with_fargo(mut self, result: Result<f64, &str>) -> Self {
        self.fargo = result.map_err(str::to_string);
        self
    }

    pub fn with_skill(mut self, result: Result<SkillForecast, &str>) -> Self {
        self.skill = result.map_err(str::to_string);
        self
    }

    pub fn fargo_calls(&self) -> usize {
        self.fargo_requests.lock().unwrap().len()
    }

    pub fn skill_calls(&self) -> usize {
        self.skill_requests.lock().unwrap().len()
    }

    pub fn last_fargo_request(&self) -> Option<FargoRequest> {
        self.fargo_requests.lock().unwrap().last().cloned()
    }

    pub fn last_skill_request(&self) -> Option<SkillRequest> {
        self.skill_requests.lock().unwrap().last().cloned()
    }

    fn server_error(message: &str) -> PredictionError {
        PredictionError::Server {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PredictionApi for ScriptedPredictions {
    async fn predict_fargo(&self, request: &FargoRequest) -> Result<f64, PredictionError> {
        self.fargo_requests.lock().unwrap().push(request.clone());
        self.fargo
            .clone()
            .map_err(|message| Self::server_error(&message))
    }

    async fn calculate_skill(
        &self,
        request: &SkillRequest,
    ) -> Result<SkillForecast, PredictionError> {
        self.skill_requests.lock().unwrap().push(request.clone());
        self.skill
            .clone()
            .map_err(|message| Self::server_error(&message))
    }
}

struct TestApp {
    predictions: Arc<ScriptedPredictions>,
}

impl UiApp for TestApp {
    fn predictions(&self) -> Arc<dyn PredictionApi> {
        self.predictions.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { ForecastView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub predictions: Arc<ScriptedPredictions>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(predictions: ScriptedPredictions) -> ViewHarness {
    let predictions = Arc::new(predictions);
    let app = Arc::new(TestApp {
        predictions: Arc::clone(&predictions),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });
    ViewHarness { dom, predictions }
}
