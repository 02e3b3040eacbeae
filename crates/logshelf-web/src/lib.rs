//! logshelf Web API Server
//!
//! Serves the log directory over HTTP: list the catalog, fetch one file
//! parsed into records, redirect to the current session's file.

use axum::{
    extract::{Host, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use logshelf_core::{Config, Error, LogEntry};
use logshelf_store::LogSession;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Response envelope metadata: status code plus status text
#[derive(Serialize)]
pub struct Meta {
    pub code: u16,
    pub status: String,
}

/// Response envelope wrapping payloads as `{meta, data}`
#[derive(Serialize)]
pub struct Envelope<T> {
    pub meta: Meta,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            meta: Meta {
                code: StatusCode::OK.as_u16(),
                status: "OK".to_string(),
            },
            data,
        }
    }

    pub fn error(code: StatusCode, message: impl Into<String>) -> Envelope<()> {
        Envelope {
            meta: Meta {
                code: code.as_u16(),
                status: message.into(),
            },
            data: (),
        }
    }
}

/// Catalog listing payload: the current session's file plus every file
/// present in the directory
#[derive(Serialize)]
pub struct LogListing {
    pub latest_log: LogEntry,
    pub logs: Vec<LogEntry>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    session: Arc<LogSession>,
}

impl AppState {
    pub fn new(config: Arc<Config>, session: Arc<LogSession>) -> Self {
        Self { config, session }
    }
}

/// Create the API router.
///
/// The log routes are nested under the configured base URL; `/healthz`
/// stays at the root.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let logs = Router::new()
        .route("/", get(list_logs))
        .route("/file/:file", get(fetch_file))
        .route("/latest", get(fetch_latest));

    Router::new()
        .route("/healthz", get(health_check))
        .nest(&state.config.server.base_url, logs)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server, serving until the listener fails
pub async fn start_server(config: Arc<Config>, session: Arc<LogSession>) -> std::io::Result<()> {
    let state = AppState::new(config.clone(), session);
    let app = create_router(state);

    info!("Starting {} web API on {}", config.name, config.server.bind);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await
}

/// Map a store error to its HTTP status
fn error_status(err: &Error) -> StatusCode {
    match err {
        Error::FileNotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidFileName(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: Error) -> Response {
    let code = error_status(&err);
    (code, Json(Envelope::<()>::error(code, err.to_string()))).into_response()
}

// === API Handlers ===

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(Envelope::ok(serde_json::json!({
        "status": "healthy",
        "name": state.config.name,
        "version": env!("CARGO_PKG_VERSION")
    })))
}

async fn list_logs(State(state): State<AppState>, Host(host): Host) -> Response {
    let base_url = &state.config.server.base_url;
    info!("GET {}", base_url);

    match logshelf_store::entries(&state.config.directory, &host, base_url) {
        Ok(logs) => {
            let listing = LogListing {
                latest_log: state.session.entry(&host, base_url),
                logs,
            };
            Json(Envelope::ok(listing)).into_response()
        }
        Err(e) => error_response(e),
    }
}

async fn fetch_file(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Response {
    info!("GET {}/file/{}", state.config.server.base_url, file);

    let path = match logshelf_store::checked_file_path(&state.config.directory, &file) {
        Ok(path) => path,
        Err(e) => return error_response(e),
    };

    match logshelf_store::parse_file(&path) {
        Ok(records) => Json(records).into_response(),
        Err(e) => error_response(e),
    }
}

async fn fetch_latest(State(state): State<AppState>) -> Redirect {
    let base_url = &state.config.server.base_url;
    info!("GET {}/latest", base_url);

    let target = format!("{}/file/{}", base_url, state.session.file_name());
    Redirect::temporary(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use std::io::Write;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const STAMP: i64 = 1690000000000;

    fn test_state(tmp: &TempDir) -> AppState {
        let mut config = Config::default();
        config.directory = tmp.path().join("tmp-logs");
        logshelf_store::ensure_dir(&config.directory).unwrap();

        AppState::new(
            Arc::new(config),
            Arc::new(LogSession::with_stamp(STAMP, "log")),
        )
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("host", "localhost:3000")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_envelope_ok() {
        let envelope = Envelope::ok("payload");
        assert_eq!(envelope.meta.code, 200);
        assert_eq!(envelope.meta.status, "OK");
        assert_eq!(envelope.data, "payload");
    }

    #[tokio::test]
    async fn test_health_check() {
        let tmp = TempDir::new().unwrap();
        let app = create_router(test_state(&tmp));

        let response = app.oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["name"], "logshelf");
    }

    #[tokio::test]
    async fn test_list_logs_fresh_directory() {
        let tmp = TempDir::new().unwrap();
        let app = create_router(test_state(&tmp));

        let response = app.oneshot(get("/logs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["meta"]["code"], 200);
        assert_eq!(body["data"]["logs"], json!([]));
        assert_eq!(body["data"]["latest_log"]["filename"], "1690000000000.log");
        assert_eq!(
            body["data"]["latest_log"]["url"],
            "http://localhost:3000/logs/file/1690000000000.log"
        );
    }

    #[tokio::test]
    async fn test_list_logs_includes_each_file() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp);
        std::fs::File::create(state.config.directory.join("a.log")).unwrap();
        std::fs::File::create(state.config.directory.join("b.log")).unwrap();
        let app = create_router(state);

        let body = body_json(app.oneshot(get("/logs")).await.unwrap()).await;
        let logs = body["data"]["logs"].as_array().unwrap();
        assert_eq!(logs.len(), 2);
        for entry in logs {
            let filename = entry["filename"].as_str().unwrap();
            assert!(entry["url"].as_str().unwrap().ends_with(&format!("/file/{}", filename)));
        }
    }

    #[tokio::test]
    async fn test_fetch_file_returns_records() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp);
        let mut file =
            std::fs::File::create(state.config.directory.join("1690000000000.log")).unwrap();
        writeln!(file, "{}", json!({"level": 30, "msg": "hello"})).unwrap();
        let app = create_router(state);

        let response = app.oneshot(get("/logs/file/1690000000000.log")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, json!([{"level": 30, "msg": "hello"}]));
    }

    #[tokio::test]
    async fn test_fetch_file_not_found() {
        let tmp = TempDir::new().unwrap();
        let app = create_router(test_state(&tmp));

        let response = app.oneshot(get("/logs/file/missing.log")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["meta"]["code"], 404);
    }

    #[tokio::test]
    async fn test_fetch_file_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let app = create_router(test_state(&tmp));

        let response = app.oneshot(get("/logs/file/..%2Fsecret")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fetch_file_malformed_record() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(&tmp);
        let mut file = std::fs::File::create(state.config.directory.join("bad.log")).unwrap();
        writeln!(file, "not json").unwrap();
        let app = create_router(state);

        let response = app.oneshot(get("/logs/file/bad.log")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_fetch_latest_redirects_to_session_file() {
        let tmp = TempDir::new().unwrap();
        let app = create_router(test_state(&tmp));

        let response = app.oneshot(get("/logs/latest")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/logs/file/1690000000000.log"
        );
    }
}
