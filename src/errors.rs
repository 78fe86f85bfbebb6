use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use askama::Template;
use thiserror::Error;

use crate::templates::ErrorTemplate;

#[derive(Error, Debug)]
pub enum CallbackError {
    #[error("Authorization code missing{}", provider_suffix(.provider_error))]
    MissingCode { provider_error: Option<String> },
    #[error("Invalid authorization code: {0}")]
    InvalidCode(String),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("tls error: {0}")]
    TlsError(String),
    #[error("render error: {0}")]
    RenderError(#[from] askama::Error),
    #[cfg(feature = "otel")]
    #[error("trace error: {0}")]
    TraceError(#[from] opentelemetry::trace::TraceError),
}

fn provider_suffix(provider_error: &Option<String>) -> String {
    match provider_error {
        Some(e) => format!(" (provider error: {e})"),
        None => String::new(),
    }
}

impl ResponseError for CallbackError {
    fn status_code(&self) -> StatusCode {
        match self {
            CallbackError::MissingCode { .. } | CallbackError::InvalidCode(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.status_code() {
            StatusCode::BAD_REQUEST => self.to_string(),
            _ => "Internal Server Error".to_string(),
        };
        let body = ErrorTemplate { message: &message }
            .render()
            .unwrap_or_else(|_| "<h1>Error</h1>".to_string());
        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}
