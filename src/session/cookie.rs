//! Reading and writing the session cookie.

use axum_extra::extract::{CookieJar, cookie::Cookie};
use time::Duration;

use super::SessionId;

/// The name of the cookie that holds the session ID.
pub const SESSION_COOKIE: &str = "sessionId";
/// How long the client keeps the session cookie.
pub const SESSION_COOKIE_MAX_AGE: Duration = Duration::days(7);

/// Get the session ID from the cookie jar.
///
/// Returns `None` if the cookie is missing or does not hold a valid session ID.
pub fn get_session_id(jar: &CookieJar) -> Option<SessionId> {
    let cookie = jar.get(SESSION_COOKIE)?;

    match SessionId::parse(cookie.value_trimmed()) {
        Some(session_id) => Some(session_id),
        None => {
            tracing::debug!("Ignoring malformed session cookie {:?}", cookie.value());
            None
        }
    }
}

/// Add the session cookie to the cookie jar.
///
/// The cookie applies to every path and expires after [SESSION_COOKIE_MAX_AGE].
pub fn set_session_cookie(jar: CookieJar, session_id: SessionId) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, session_id.to_string()))
            .path("/")
            .max_age(SESSION_COOKIE_MAX_AGE)
            .http_only(true),
    )
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::{CookieJar, cookie::Cookie};
    use time::Duration;

    use crate::session::{SESSION_COOKIE, SessionId, get_session_id, set_session_cookie};

    #[test]
    fn get_session_id_from_empty_jar() {
        assert_eq!(get_session_id(&CookieJar::new()), None);
    }

    #[test]
    fn get_session_id_ignores_malformed_cookie() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "FOOBAR"));

        assert_eq!(get_session_id(&jar), None);
    }

    #[test]
    fn set_then_get_session_id() {
        let session_id = SessionId::new();

        let jar = set_session_cookie(CookieJar::new(), session_id);

        assert_eq!(get_session_id(&jar), Some(session_id));
    }

    #[test]
    fn session_cookie_lasts_seven_days_on_every_path() {
        let jar = set_session_cookie(CookieJar::new(), SessionId::new());
        let cookie = jar.get(SESSION_COOKIE).unwrap();

        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
