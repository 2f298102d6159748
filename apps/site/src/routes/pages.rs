//! Server-rendered pages and the theme toggle.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::render::shell::{render_page, render_resume_page};
use crate::render::PageContext;
use crate::state::AppState;
use crate::theme::cookie::{platform_preference, CookieStore};
use crate::theme::ThemeState;

fn theme_for(headers: &HeaderMap) -> ThemeState {
    let store = CookieStore::from_headers(headers);
    ThemeState::resolve(&store, platform_preference(headers))
}

fn current_year() -> i32 {
    Utc::now().year()
}

/// GET /
pub async fn handle_home(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let theme = theme_for(&headers);
    let ctx = PageContext {
        content: &state.content,
        palette: theme.palette(&state.colors),
        is_dark: theme.is_dark_mode(),
    };
    Html(render_page(&ctx, &state.layout, current_year()))
}

/// GET /resume
pub async fn handle_resume_page(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let theme = theme_for(&headers);
    Html(render_resume_page(
        &state.content.site,
        theme.palette(&state.colors),
        theme.is_dark_mode(),
        current_year(),
    ))
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    pub redirect: Option<String>,
}

/// POST /theme/toggle
///
/// Flips the persisted flag and sends the browser back to the page it came from.
pub async fn handle_toggle_theme(headers: HeaderMap, Form(form): Form<ToggleForm>) -> Response {
    let mut store = CookieStore::from_headers(&headers);
    let mut theme = ThemeState::resolve(&store, platform_preference(&headers));
    theme.toggle(&mut store);
    debug!("Theme toggled to {}", theme.mode_name());

    let location = safe_redirect(form.redirect.as_deref());
    let mut response = (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response();
    if let Some(cookie) = store.set_cookie_header() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

/// Only same-site absolute paths made of visible ASCII are followed.
fn safe_redirect(target: Option<&str>) -> String {
    match target {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && path.chars().all(|c| c.is_ascii_graphic()) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}
