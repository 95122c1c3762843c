use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use scribble_core::models::ThemeMode;

pub const THEME_COOKIE: &str = "theme";

/// Theme preference stored in the request cookies; unknown values read as
/// the default.
pub fn theme_from_jar(jar: &CookieJar) -> ThemeMode {
    jar.get(THEME_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
        .unwrap_or_default()
}

pub fn theme_cookie(mode: ThemeMode) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, mode.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .permanent()
        .build()
}

/// Where to send the browser after changing the theme.
///
/// Only same-site absolute paths are honoured.
pub fn safe_redirect(target: Option<&str>) -> &str {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_theme_cookie() {
        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "dark"));
        assert_eq!(theme_from_jar(&jar), ThemeMode::Dark);
    }

    #[test]
    fn missing_or_unknown_cookie_is_system() {
        assert_eq!(theme_from_jar(&CookieJar::new()), ThemeMode::System);
        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "sepia"));
        assert_eq!(theme_from_jar(&jar), ThemeMode::System);
    }

    #[test]
    fn cookie_is_site_wide() {
        let cookie = theme_cookie(ThemeMode::Light);
        assert_eq!(cookie.value(), "light");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn redirect_stays_on_site() {
        assert_eq!(safe_redirect(Some("/users/alice")), "/users/alice");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(None), "/");
    }
}
