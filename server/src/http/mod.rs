use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use webapp::Site;

pub mod svc;

// request failures
//
// a missing page still renders the full site shell so the navigation keeps
// working; anything else is a bare 500
#[derive(Debug, Error)]
pub enum PageError {
    #[error("not found: {what}")]
    NotFound { what: String, site: Site },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PageError {
    pub fn not_found(site: &Site, what: impl Into<String>) -> Self {
        PageError::NotFound {
            what: what.into(),
            site: site.clone(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound { site, .. } => {
                (StatusCode::NOT_FOUND, Html(webapp::render_not_found(&site))).into_response()
            }
            PageError::Internal(err) => {
                error!(error = %err, "page render failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("internal server error: {err}"),
                )
                    .into_response()
            }
        }
    }
}
