//! HTTP-side persistence of the theme flag: a `darkMode` cookie plus the
//! `Sec-CH-Prefers-Color-Scheme` client hint as the platform preference.

use axum::http::{header, HeaderMap, HeaderValue};

use crate::theme::{PreferenceStore, STORAGE_KEY};

/// Client hint carrying the browser's colour-scheme preference.
pub const PLATFORM_HINT_HEADER: &str = "sec-ch-prefers-color-scheme";

const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Cookie-backed preference store for one request/response pair.
///
/// `load` reads what the browser sent; `save` records a value that
/// `set_cookie_header` turns into the response header.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    persisted: Option<bool>,
    pending: Option<bool>,
}

impl CookieStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let persisted = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == STORAGE_KEY)
            .map(|(_, value)| value.trim() == "true");

        Self {
            persisted,
            pending: None,
        }
    }

    /// The `Set-Cookie` value for a saved change, if any.
    pub fn set_cookie_header(&self) -> Option<HeaderValue> {
        let value = self.pending?;
        HeaderValue::from_str(&format!(
            "{STORAGE_KEY}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ))
        .ok()
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self) -> Option<bool> {
        self.pending.or(self.persisted)
    }

    fn save(&mut self, is_dark_mode: bool) {
        self.pending = Some(is_dark_mode);
    }
}

/// Reads the platform colour-scheme preference, if the browser sent one.
pub fn platform_preference(headers: &HeaderMap) -> Option<bool> {
    let value = headers.get(PLATFORM_HINT_HEADER)?.to_str().ok()?;
    match value.trim().trim_matches('"') {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeState;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_reads_dark_mode_cookie_among_others() {
        let store = CookieStore::from_headers(&headers(&[("cookie", "session=abc; darkMode=true")]));
        assert_eq!(store.load(), Some(true));
    }

    #[test]
    fn test_non_true_value_reads_as_light() {
        let store = CookieStore::from_headers(&headers(&[("cookie", "darkMode=yes")]));
        assert_eq!(store.load(), Some(false));
    }

    #[test]
    fn test_absent_cookie_is_no_preference() {
        let store = CookieStore::from_headers(&headers(&[("cookie", "session=abc")]));
        assert_eq!(store.load(), None);
        assert!(store.set_cookie_header().is_none());
    }

    #[test]
    fn test_toggle_emits_set_cookie() {
        let mut store = CookieStore::from_headers(&headers(&[("cookie", "darkMode=false")]));
        let mut state = ThemeState::resolve(&store, None);

        state.toggle(&mut store);

        let cookie = store.set_cookie_header().unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("darkMode=true;"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_platform_hint_parsing() {
        assert_eq!(platform_preference(&headers(&[(PLATFORM_HINT_HEADER, "\"dark\"")])), Some(true));
        assert_eq!(platform_preference(&headers(&[(PLATFORM_HINT_HEADER, "light")])), Some(false));
        assert_eq!(platform_preference(&headers(&[(PLATFORM_HINT_HEADER, "sepia")])), None);
        assert_eq!(platform_preference(&HeaderMap::new()), None);
    }
}
