use std::path::{Path, PathBuf};
use std::time::Instant;

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{self, log_event, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const INDEX_FILE: &str = "index.html";

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = non_empty("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .filter(|port| *port != 0)
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = non_empty("LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

/// Serves the Trunk bundle; unknown paths get the page shell so anchors still load.
pub fn router(dist_dir: &Path) -> Router {
    let static_service =
        ServeDir::new(dist_dir).not_found_service(ServeFile::new(dist_dir.join(INDEX_FILE)));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if is_html(&response) {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    }

    log_event(
        LogLevel::Info,
        "http_request",
        json!({
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "elapsedMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn is_html(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("text/html"))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    logging::set_level(config.log_level);

    let app = router(&config.dist_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    log_event(
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, app).await?;
    Ok(())
}
