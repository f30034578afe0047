use crate::error::ApiError;
use crate::page::{self, Output};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use phishguard_classifier::{ClassifyError, EmailClassifier, EmailText, Label};
use phishguard_types::{
    ClassifyRequest, ClassifyResponse, InterfaceConfig, PredictRequest, PredictResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub struct AppState<C> {
    classifier: Arc<C>,
    interface: Arc<InterfaceConfig>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            interface: self.interface.clone(),
        }
    }
}

impl<C: EmailClassifier> AppState<C> {
    fn classify(&self, text: &EmailText) -> Label {
        let label = self.classifier.classify(text);
        log::debug!("{}", classification_log_line(text, label));
        label
    }
}

/// Only the input length is logged, never the text.
fn classification_log_line(text: &EmailText, label: Label) -> String {
    format!("Classified {} bytes as {label}", text.len())
}

#[derive(Debug, Deserialize)]
struct ClassifyForm {
    email_text: Option<String>,
}

pub fn router<C>(classifier: C, interface: InterfaceConfig) -> Router
where
    C: EmailClassifier + Send + Sync + 'static,
{
    let state = AppState {
        classifier: Arc::new(classifier),
        interface: Arc::new(interface),
    };

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _request_head| {
            let origin_str = origin.to_str().unwrap_or("");
            origin_str.starts_with("http://localhost:")
        }))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/readyz", get(|| async { "OK" }))
        .route("/livez", get(|| async { "OK" }))
        .route("/", get(index::<C>).post(submit_form::<C>))
        .route("/config", get(interface_config::<C>))
        .route("/v1/classify", axum::routing::post(classify_json::<C>))
        .route("/api/predict", axum::routing::post(predict::<C>))
        .layer(cors)
        .with_state(state)
}

async fn index<C>(State(state): State<AppState<C>>) -> Html<String>
where
    C: EmailClassifier + Send + Sync + 'static,
{
    Html(page::render(&state.interface, "", &Output::Empty))
}

async fn submit_form<C>(
    State(state): State<AppState<C>>,
    form: Result<Form<ClassifyForm>, FormRejection>,
) -> Response
where
    C: EmailClassifier + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            log::warn!("Rejected form submission: {}", rejection.body_text());
            let html = page::render(
                &state.interface,
                "",
                &Output::Error(rejection.body_text()),
            );
            return (rejection.status(), Html(html)).into_response();
        }
    };

    match form.email_text {
        Some(text) => {
            let label = state.classify(&EmailText::from(text.as_str()));
            Html(page::render(&state.interface, &text, &Output::Label(label))).into_response()
        }
        None => {
            let err = ClassifyError::InvalidInput { found: "nothing" };
            log::warn!("Rejected form submission: {err}");
            let html = page::render(&state.interface, "", &Output::Error(err.to_string()));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
    }
}

async fn interface_config<C>(State(state): State<AppState<C>>) -> Json<InterfaceConfig>
where
    C: EmailClassifier + Send + Sync + 'static,
{
    Json(state.interface.as_ref().clone())
}

async fn classify_json<C>(
    State(state): State<AppState<C>>,
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError>
where
    C: EmailClassifier + Send + Sync + 'static,
{
    let Json(request) = body?;
    let text = EmailText::try_from(&request.text)?;
    let label = state.classify(&text);
    Ok(Json(ClassifyResponse { label }))
}

async fn predict<C>(
    State(state): State<AppState<C>>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError>
where
    C: EmailClassifier + Send + Sync + 'static,
{
    let Json(request) = body?;
    let [value] = request.data.as_slice() else {
        return Err(ApiError::InputCount(request.data.len()));
    };
    let text = EmailText::try_from(value)?;
    let label = state.classify(&text);
    Ok(Json(PredictResponse { data: vec![label] }))
}
