//! The single page handler, adapting axum requests to the core
//! [`RequestContext`] abstraction.

use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use pogoda_core::{ForecastPage, RequestContext, WeatherService, handle_weather};

use crate::{cookie, render};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(service: Arc<WeatherService>) -> Self {
        Self { service }
    }
}

/// Form payload of a POST; GET requests simply carry no city.
#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city: Option<String>,
}

/// Axum-backed request context: form field and cookie on the way in,
/// rendered HTML and an optional `Set-Cookie` on the way out.
struct AxumContext {
    form_city: Option<String>,
    cookie_city: Option<String>,
    cookie_name: String,
    html: String,
    set_cookie: Option<String>,
}

impl RequestContext for AxumContext {
    fn form_city(&self) -> Option<String> {
        self.form_city.clone()
    }

    fn last_city(&self) -> Option<String> {
        self.cookie_city.clone()
    }

    fn remember_city(&mut self, city: &str) {
        self.set_cookie = Some(cookie::set(&self.cookie_name, city));
    }

    fn render(&mut self, page: &ForecastPage) {
        self.html = render::page(page);
    }
}

/// GET/POST `/`: the weather page.
///
/// Pipeline failures render inline, so the response is always a full 200
/// page; the only non-200 would come from the framework itself.
pub async fn weather_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CityForm>,
) -> Response {
    let cookie_name = state.service.config().cookie_name.clone();

    let cookie_city = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| cookie::read(h, &cookie_name));

    let mut ctx = AxumContext {
        form_city: form.city,
        cookie_city,
        cookie_name,
        html: String::new(),
        set_cookie: None,
    };

    handle_weather(&state.service, &mut ctx).await;

    let mut response = Html(ctx.html).into_response();

    if let Some(value) = ctx.set_cookie {
        match value.parse() {
            Ok(header_value) => {
                response.headers_mut().insert(header::SET_COOKIE, header_value);
            }
            Err(e) => {
                // Encoded cookie values are ASCII; reaching this is a bug.
                tracing::error!("could not build Set-Cookie header: {e}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }

    response
}
