//! HTTP surface of the emulated repository.
//!
//! A single fallback handler serves every path: the method gate runs first,
//! then the homepage check, then classification. Anything the classifier
//! rejects gets the not-found page.

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tracing::{error, info};

use crate::classifier;
use crate::models::{NotFoundContext, INFO_URL};
use crate::pages;
use crate::synthesizer;

pub fn routes() -> Router {
    Router::new().fallback(handle)
}

async fn handle(method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return write_status(StatusCode::BAD_REQUEST, &uri);
    }

    let path = uri.path();
    if path == "/" || path == "/index.html" {
        return write_data(
            Bytes::from_static(pages::INDEX_HTML.as_bytes()),
            "text/html",
            &uri,
        );
    }

    let Some(request) = classifier::classify(path) else {
        return write_not_found(&uri);
    };

    match synthesizer::synthesize(&request) {
        Ok((payload, content_type)) => write_data(payload, content_type, &uri),
        Err(err) => write_error(err, &uri),
    }
}

fn write_data(payload: Bytes, content_type: &'static str, uri: &Uri) -> Response {
    log_outcome(StatusCode::OK, uri);
    ([(header::CONTENT_TYPE, content_type)], payload).into_response()
}

fn write_not_found(uri: &Uri) -> Response {
    let context = NotFoundContext {
        requested_url: uri.to_string(),
        info_url: INFO_URL,
    };

    match pages::render_not_found(&context) {
        Ok(page) => {
            log_outcome(StatusCode::NOT_FOUND, uri);
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/html")],
                page,
            )
                .into_response()
        }
        Err(err) => write_error(err, uri),
    }
}

fn write_error(err: impl std::fmt::Display, uri: &Uri) -> Response {
    error!("{}", err);
    write_status(StatusCode::INTERNAL_SERVER_ERROR, uri)
}

fn write_status(status: StatusCode, uri: &Uri) -> Response {
    log_outcome(status, uri);
    status.into_response()
}

fn log_outcome(status: StatusCode, uri: &Uri) {
    info!("{} {}", status.as_u16(), uri);
}
