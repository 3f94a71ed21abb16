use crate::actor::{Reply, ScrollInput, ShellMessage};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use prism_core::{builtin_presets, ScrollMetrics, SceneConfig};
use prism_theme::{log_failure, ThemeError, ThemeService};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, Serialize)]
pub struct ApiError {
    error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

fn error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(err)).into_response()
}

#[derive(Clone)]
pub struct AppState {
    pub tx: mpsc::Sender<ShellMessage>,
    pub themes: ThemeService,
}

pub fn router(state: AppState, allow_origin: HeaderValue) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/state", get(state_handler))
        .route("/api/config", get(config_handler).post(set_config_handler))
        .route("/api/config/edit", post(edit_handler))
        .route("/api/presets", get(presets_handler))
        .route("/api/preset", post(preset_handler))
        .route("/api/scroll", post(scroll_handler))
        .route("/api/frame", get(frame_handler))
        .route("/api/scene", get(scene_handler))
        .route("/api/theme", post(theme_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(allow_origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}

/// Sends a message to the shell thread and waits for the reply.
async fn ask<T>(
    state: &AppState,
    message: impl FnOnce(Reply<T>) -> ShellMessage,
) -> Result<T, Response> {
    let (tx, rx) = oneshot::channel();
    let closed = || {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("Shell channel closed"),
        )
    };
    state.tx.send(message(tx)).await.map_err(|_| closed())?;
    rx.await.map_err(|_| closed())
}

fn reply<T: Serialize>(result: Result<T, Response>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(response) => response,
    }
}

fn reply_checked<T: Serialize>(result: Result<Result<T, ApiError>, Response>) -> Response {
    match result {
        Ok(Ok(value)) => Json(value).into_response(),
        Ok(Err(err)) => error_response(StatusCode::BAD_REQUEST, err),
        Err(response) => response,
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateResponse {
    #[serde(flatten)]
    shell: crate::actor::ShellState,
    theme_pending: bool,
}

async fn state_handler(State(state): State<AppState>) -> Response {
    match ask(&state, |resp| ShellMessage::GetState { resp }).await {
        Ok(shell) => Json(StateResponse {
            shell,
            theme_pending: state.themes.is_pending(),
        })
        .into_response(),
        Err(response) => response,
    }
}

async fn config_handler(State(state): State<AppState>) -> Response {
    reply(ask(&state, |resp| ShellMessage::GetConfig { resp }).await)
}

async fn set_config_handler(
    State(state): State<AppState>,
    Json(config): Json<SceneConfig>,
) -> Response {
    reply(ask(&state, |resp| ShellMessage::SetConfig { config, resp }).await)
}

#[derive(Deserialize)]
struct EditRequest {
    field: String,
    value: serde_json::Value,
}

async fn edit_handler(State(state): State<AppState>, Json(edit): Json<EditRequest>) -> Response {
    // Sliders send numbers, pickers and selects send strings.
    let value = match edit.value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        other => {
            return error_response(
                StatusCode::BAD_REQUEST,
                ApiError::new(format!("Unsupported value for '{}': {}", edit.field, other)),
            )
        }
    };
    let field = edit.field;
    reply_checked(ask(&state, |resp| ShellMessage::Edit { field, value, resp }).await)
}

#[derive(Serialize)]
struct PresetInfo {
    name: &'static str,
    config: SceneConfig,
}

async fn presets_handler() -> impl IntoResponse {
    let presets: Vec<PresetInfo> = builtin_presets()
        .into_iter()
        .map(|p| PresetInfo {
            name: p.name,
            config: p.config,
        })
        .collect();
    Json(presets)
}

#[derive(Deserialize)]
struct PresetRequest {
    name: String,
}

async fn preset_handler(
    State(state): State<AppState>,
    Json(params): Json<PresetRequest>,
) -> Response {
    let name = params.name;
    reply_checked(ask(&state, |resp| ShellMessage::ApplyPreset { name, resp }).await)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScrollRequest {
    Fraction { fraction: f32 },
    Metrics(ScrollMetrics),
}

async fn scroll_handler(
    State(state): State<AppState>,
    Json(params): Json<ScrollRequest>,
) -> Response {
    let input = match params {
        ScrollRequest::Fraction { fraction } => ScrollInput::Fraction(fraction),
        ScrollRequest::Metrics(metrics) => ScrollInput::Metrics(metrics),
    };
    match ask(&state, |resp| ShellMessage::SetScroll { input, resp }).await {
        Ok(fraction) => Json(serde_json::json!({ "scroll": fraction })).into_response(),
        Err(response) => response,
    }
}

#[derive(Deserialize)]
struct FrameParams {
    time: Option<f64>,
    dt: Option<f32>,
}

async fn frame_handler(
    State(state): State<AppState>,
    Query(params): Query<FrameParams>,
) -> Response {
    let FrameParams { time, dt } = params;
    reply(ask(&state, |resp| ShellMessage::Frame { time, dt, resp }).await)
}

async fn scene_handler(State(state): State<AppState>) -> Response {
    reply(ask(&state, |resp| ShellMessage::GetScene { resp }).await)
}

#[derive(Deserialize)]
struct ThemeRequest {
    prompt: String,
}

async fn theme_handler(State(state): State<AppState>, Json(params): Json<ThemeRequest>) -> Response {
    let theme = match state.themes.try_generate(&params.prompt).await {
        Ok(theme) => Some(theme),
        Err(ThemeError::EmptyPrompt) => {
            return error_response(StatusCode::BAD_REQUEST, ApiError::new("Prompt is empty"))
        }
        Err(ThemeError::Busy) => {
            return error_response(
                StatusCode::CONFLICT,
                ApiError::new("A theme request is already in flight"),
            )
        }
        Err(e) => {
            log_failure(&e);
            None
        }
    };
    reply(ask(&state, |resp| ShellMessage::ApplyTheme { theme, resp }).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor;
    use async_trait::async_trait;
    use prism_core::{AiThemeResponse, PresentationShell};
    use prism_theme::ThemeGenerator;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct FixedTheme(Option<AiThemeResponse>);

    #[async_trait]
    impl ThemeGenerator for FixedTheme {
        async fn generate(&self, _prompt: &str) -> Result<AiThemeResponse, ThemeError> {
            self.0
                .clone()
                .ok_or_else(|| ThemeError::Schema("no text".into()))
        }
    }

    fn neon() -> AiThemeResponse {
        serde_json::from_value(json!({
            "themeName": "Neon Grid",
            "config": {
                "color": "#00ffcc",
                "bgColor": "#050010",
                "metalness": 0.3,
                "roughness": 0.1,
                "shape": "Octahedron"
            }
        }))
        .unwrap()
    }

    async fn serve(theme: Option<AiThemeResponse>) -> String {
        let state = AppState {
            tx: actor::spawn(PresentationShell::default()),
            themes: ThemeService::new(Arc::new(FixedTheme(theme))),
        };
        let app = router(state, HeaderValue::from_static("*"));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let base = serve(None).await;
        let body: Value = reqwest::get(format!("{}/api/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn panel_edits_update_the_config() {
        let base = serve(None).await;
        let client = reqwest::Client::new();

        let config: Value = client
            .post(format!("{}/api/config/edit", base))
            .json(&json!({ "field": "scale", "value": 2.5 }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(config["scale"], 2.5);

        let res = client
            .post(format!("{}/api/config/edit", base))
            .json(&json!({ "field": "color", "value": "purple" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn frames_follow_the_scroll() {
        let base = serve(None).await;
        let client = reqwest::Client::new();

        let scroll: Value = client
            .post(format!("{}/api/scroll", base))
            .json(&json!({ "scrollTop": 2000.0, "scrollHeight": 3000.0, "clientHeight": 1000.0 }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(scroll["scroll"], 1.0);

        let mut frame = Value::Null;
        for _ in 0..600 {
            frame = client
                .get(format!("{}/api/frame?dt=0.05", base))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
        }
        assert!(frame["progress"].as_f64().unwrap() > 0.999);
        assert_eq!(frame["section"], "Pure Form");
    }

    #[tokio::test]
    async fn theme_success_merges_and_reports() {
        let base = serve(Some(neon())).await;
        let body: Value = reqwest::Client::new()
            .post(format!("{}/api/theme", base))
            .json(&json!({ "prompt": "neon" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "applied");
        assert_eq!(body["message"], "Applied theme: Neon Grid");
        assert_eq!(body["config"]["shape"], "Octahedron");
        assert_eq!(body["config"]["scale"], 1.5);
    }

    #[tokio::test]
    async fn theme_failure_keeps_the_config() {
        let base = serve(None).await;
        let client = reqwest::Client::new();

        let body: Value = client
            .post(format!("{}/api/theme", base))
            .json(&json!({ "prompt": "anything" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "failed");
        assert_eq!(body["message"], prism_core::THEME_FAILURE_MESSAGE);
        assert_eq!(body["config"]["shape"], "Icosahedron");

        let res = client
            .post(format!("{}/api/theme", base))
            .json(&json!({ "prompt": "  " }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
