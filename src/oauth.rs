use actix_web::{
    http::header::{self, HeaderValue},
    web, HttpResponse,
};
use askama::Template;
use tracing::{info, warn};

use crate::{
    errors::CallbackError,
    redirect::app_redirect_url,
    state::{AppState, CallbackMode},
    templates::EchoTemplate,
};

/// Paths the provider may send the user back to.
pub const CALLBACK_PATHS: [&str; 2] = ["/callback", "/strava/callback"];

/// Query string of the provider's redirect. Only `code` is forwarded;
/// `scope` and `state` are logged and otherwise ignored.
#[derive(Debug, PartialEq)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub scope: Option<String>,
    pub state: Option<String>,
}

impl CallbackQuery {
    /// The first occurrence of a repeated key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = CallbackQuery {
            code: None,
            error: None,
            scope: None,
            state: None,
        };
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut query.code,
                "error" => &mut query.error,
                "scope" => &mut query.scope,
                "state" => &mut query.state,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(CALLBACK_PATHS.to_vec()).route(web::get().to(callback)));
}

pub async fn callback(
    data: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, CallbackError> {
    let query = CallbackQuery::from_pairs(query.into_inner());

    match data.mode {
        CallbackMode::Echo => echo(&query),
        CallbackMode::Redirect => forward(&data, query),
    }
}

fn forward(data: &AppState, query: CallbackQuery) -> Result<HttpResponse, CallbackError> {
    let code = match query.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => {
            warn!(
                provider_error = ?query.error,
                "callback received without an authorization code"
            );
            return Err(CallbackError::MissingCode {
                provider_error: query.error,
            });
        }
    };

    let url = app_redirect_url(&data.app_redirect_uri, code, data.encode_code);
    let location = HeaderValue::from_bytes(url.as_bytes()).map_err(|_| {
        warn!("authorization code cannot be carried in a Location header");
        CallbackError::InvalidCode("contains characters not allowed in a redirect".to_string())
    })?;

    info!(
        scope = ?query.scope,
        has_state = query.state.is_some(),
        "forwarding authorization code to app"
    );
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish())
}

fn echo(query: &CallbackQuery) -> Result<HttpResponse, CallbackError> {
    let body = EchoTemplate {
        code: query.code.as_deref().unwrap_or_default(),
    }
    .render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
