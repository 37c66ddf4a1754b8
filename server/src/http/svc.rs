use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    extract::{Path as UrlPath, State},
    http::{Uri, header},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info, instrument};

use crate::http::PageError;
use api::{MovieId, WatchlistId};
use common::{
    catalog::Catalog,
    config::{AmberConfig, SiteConfig},
};
use webapp::{
    Site,
    route::{STATIC_ROOT, STYLESHEET_PATH},
};

// shared, read-only request state
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    site: Site,
}

impl AppState {
    pub fn new(catalog: Catalog, site: &SiteConfig) -> Self {
        AppState {
            catalog,
            site: Site {
                title: site.title.clone(),
                person_id: site.person_id.clone(),
            },
        }
    }
}

pub async fn serve_http(config: Arc<AmberConfig>, state: Arc<AppState>) -> anyhow::Result<()> {
    let socket: SocketAddr = config
        .http
        .socket
        .parse()
        .with_context(|| format!("invalid http socket {}", config.http.socket))?;

    let router = router(state, &config.http.static_root);

    let listener = tokio::net::TcpListener::bind(socket)
        .await
        .with_context(|| format!("failed to bind {socket}"))?;

    info!("listening on {socket}");

    axum::serve(listener, router)
        .await
        .context("http server exited")
}

pub fn router(state: Arc<AppState>, static_root: &Path) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/library", get(library))
        .route("/movie/{movie_id}", get(movie))
        .route("/watchlist/{watchlist_id}", get(watchlist))
        .route("/player", get(player))
        .route("/people/{person_id}", get(people))
        .route(STYLESHEET_PATH, get(stylesheet))
        .nest_service(STATIC_ROOT, ServeDir::new(static_root))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// rendering is synchronous and cpu-bound, so it runs off the async workers
async fn render_page<F>(state: &AppState, page: F) -> Result<Html<String>, PageError>
where
    F: FnOnce(&Site) -> String + Send + 'static,
{
    let site = state.site.clone();

    let html = tokio::task::spawn_blocking(move || page(&site))
        .await
        .context("page render task failed")?;

    Ok(Html(html))
}

#[instrument(skip_all)]
async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let ctx = state.catalog.home_context();

    render_page(&state, move |site| webapp::render_home(site, ctx)).await
}

#[instrument(skip_all)]
async fn library(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let ctx = state.catalog.library_context();

    render_page(&state, move |site| webapp::render_library(site, ctx)).await
}

// ids that do not parse are treated the same as ids that do not exist
#[instrument(skip(state))]
async fn movie(
    State(state): State<Arc<AppState>>,
    UrlPath(movie_id): UrlPath<String>,
) -> Result<Html<String>, PageError> {
    let ctx = movie_id
        .parse::<MovieId>()
        .ok()
        .and_then(|id| state.catalog.movie_context(id))
        .ok_or_else(|| PageError::not_found(&state.site, format!("movie {movie_id}")))?;

    render_page(&state, move |site| webapp::render_movie(site, ctx)).await
}

#[instrument(skip(state))]
async fn watchlist(
    State(state): State<Arc<AppState>>,
    UrlPath(watchlist_id): UrlPath<String>,
) -> Result<Html<String>, PageError> {
    let ctx = watchlist_id
        .parse::<WatchlistId>()
        .ok()
        .and_then(|id| state.catalog.watchlist_context(id))
        .ok_or_else(|| PageError::not_found(&state.site, format!("watchlist {watchlist_id}")))?;

    render_page(&state, move |site| webapp::render_watchlist(site, ctx)).await
}

async fn player(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    render_page(&state, webapp::render_player).await
}

#[instrument(skip(state))]
async fn people(
    State(state): State<Arc<AppState>>,
    UrlPath(person_id): UrlPath<String>,
) -> Result<Html<String>, PageError> {
    render_page(&state, move |site| webapp::render_people(site, &person_id)).await
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        webapp::stylesheet(),
    )
}

async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> PageError {
    debug!(uri = %uri, "no route");

    PageError::not_found(&state.site, uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const CATALOG: &str = r#"{
        "movies": [
            {"id": 1, "title": "Batman Begins", "genres": ["Action"], "ranking": 8},
            {"id": 2, "title": "The Dark Knight", "genres": ["Action"], "ranking": 9}
        ],
        "watchlists": [
            {"id": 1, "title": "The Dark Knight Trilogy", "films": [1, 2], "boxoffice": 2463716216}
        ]
    }"#;

    fn app() -> Router {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let state = Arc::new(AppState::new(catalog, &SiteConfig::default()));

        router(state, Path::new("/nonexistent"))
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_page() {
        let (status, content_type, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("carousel-item active"));
    }

    #[tokio::test]
    async fn watchlist_page() {
        let (status, _, body) = get("/watchlist/1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("#1/1"));
        assert!(body.contains("$2,463,716,216"));
        assert_eq!(body.matches("movie-card").count(), 2);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        for uri in ["/watchlist/9", "/movie/77", "/movie/abc", "/nowhere"] {
            let (status, _, body) = get(uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.contains("Page not found"), "{uri}");
        }
    }

    #[tokio::test]
    async fn other_pages() {
        for uri in ["/library", "/movie/2", "/player", "/people/ada"] {
            let (status, _, _) = get(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn person_id_is_encoded_in_links() {
        let (status, _, body) = get("/people/%22%3E%3Cimg%20src%3Dx%20onerror%3Dalert(1)%3E").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<img src=x"));
        assert!(body.contains(r#"href="/people/%22%3E%3Cimg%20src%3Dx"#));
    }

    #[tokio::test]
    async fn stylesheet_is_css() {
        let (status, content_type, body) = get("/assets/amber.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css; charset=utf-8"));
        assert!(body.contains("--amber-orange"));
    }
}
