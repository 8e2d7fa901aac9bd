//! Cookie-backed session storage
//!
//! The auth and refresh tokens live in cookies that expire ten days after they
//! are written, are scoped to `/`, use `SameSite=Strict`, and are marked
//! `Secure` only when the page itself was served over HTTPS.
//!
//! [`SessionStore`] speaks `document.cookie` semantics through the
//! [`CookieJar`] trait: reads return every visible `name=value` pair joined by
//! `; `, and each write is one assignment string that sets a cookie or, with an
//! expiry in the past, deletes it.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Cookie names
pub struct CookieKeys;

impl CookieKeys {
    pub const AUTH: &'static str = "Auth-Token";
    pub const REFRESH_TOKEN: &'static str = "Refresh-Token";
    pub const API_TOKEN: &'static str = "api-key";
}

/// Lifetime of a freshly written session cookie
pub const SESSION_LIFETIME_DAYS: i64 = 10;

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub const fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "strict",
            SameSite::Lax => "lax",
            SameSite::None => "none",
        }
    }
}

/// `true` when the page protocol (as reported by `location.protocol`) is HTTPS
pub fn is_secure_protocol(protocol: &str) -> bool {
    protocol == "https:"
}

/// Attributes written alongside a session cookie
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    pub expires: DateTime<Utc>,
    pub path: String,
    pub same_site: SameSite,
    pub secure: bool,
}

impl CookieOptions {
    /// Options for a session cookie written at `now` on a page served over `protocol`
    pub fn session(protocol: &str, now: DateTime<Utc>) -> Self {
        Self {
            expires: now + Duration::days(SESSION_LIFETIME_DAYS),
            path: "/".to_string(),
            same_site: SameSite::Strict,
            secure: is_secure_protocol(protocol),
        }
    }

    /// Same scope, but already expired. Writing with these deletes the cookie.
    pub fn expired(&self) -> Self {
        Self {
            // the default instant is the Unix epoch
            expires: DateTime::<Utc>::default(),
            ..self.clone()
        }
    }

    /// Render the `; attr=value` tail of a cookie assignment
    pub fn to_attributes(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "; expires={}; path={}; samesite={}",
            self.expires.format(EXPIRES_FORMAT),
            self.path,
            self.same_site.as_str()
        );
        if self.secure {
            out.push_str("; secure");
        }
        out
    }
}

/// Both session tokens as currently stored
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pub auth_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Tokens handed out by a successful login or signup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTokens {
    pub auth_token: String,
    pub refresh_token: Option<String>,
}

/// Raw cookie storage, modelled on `document.cookie`
pub trait CookieJar {
    /// All visible cookies as `name=value` pairs joined by `; `
    fn read_all(&self) -> String;

    /// Apply one assignment such as `name=value; expires=...; path=/`
    fn write(&self, assignment: &str);
}

impl<J: CookieJar + ?Sized> CookieJar for std::rc::Rc<J> {
    fn read_all(&self) -> String {
        (**self).read_all()
    }

    fn write(&self, assignment: &str) {
        (**self).write(assignment);
    }
}

/// Session token storage on top of a [`CookieJar`]
#[derive(Clone, Debug, Default)]
pub struct SessionStore<J> {
    jar: J,
}

impl<J: CookieJar> SessionStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    pub fn set(&self, key: &str, value: &str, options: &CookieOptions) {
        let assignment = format!(
            "{}={}{}",
            key,
            urlencoding::encode(value),
            options.to_attributes()
        );
        tracing::debug!(cookie = key, secure = options.secure, "Writing session cookie");
        self.jar.write(&assignment);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        parse_cookies(&self.jar.read_all()).remove(key)
    }

    /// Delete `key`. The options must carry the scope the cookie was written with.
    pub fn remove(&self, key: &str, options: &CookieOptions) {
        let assignment = format!("{}={}", key, options.expired().to_attributes());
        tracing::debug!(cookie = key, "Removing session cookie");
        self.jar.write(&assignment);
    }

    pub fn session(&self) -> SessionCookies {
        let mut cookies = parse_cookies(&self.jar.read_all());
        SessionCookies {
            auth_token: cookies.remove(CookieKeys::AUTH),
            refresh_token: cookies.remove(CookieKeys::REFRESH_TOKEN),
        }
    }

    pub fn auth_token(&self) -> Option<String> {
        self.get(CookieKeys::AUTH).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token().is_some()
    }

    /// Persist the tokens of a fresh login
    pub fn store_tokens(&self, tokens: &SessionTokens, options: &CookieOptions) {
        self.set(CookieKeys::AUTH, &tokens.auth_token, options);
        if let Some(refresh) = &tokens.refresh_token {
            self.set(CookieKeys::REFRESH_TOKEN, refresh, options);
        }
    }

    /// Drop both tokens
    pub fn clear(&self, options: &CookieOptions) {
        self.remove(CookieKeys::AUTH, options);
        self.remove(CookieKeys::REFRESH_TOKEN, options);
    }
}

/// Split a `document.cookie` string into decoded name/value pairs.
/// When a name repeats the first occurrence wins, as browsers list the most
/// specific path first.
pub fn parse_cookies(raw: &str) -> BTreeMap<String, String> {
    let mut cookies = BTreeMap::new();
    for pair in raw.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let value = urlencoding::decode(value.trim())
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.trim().to_string());
        cookies.entry(name.to_string()).or_insert(value);
    }
    cookies
}

/// In-memory [`CookieJar`] honouring expiry against an injectable clock
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, StoredCookie>>,
    writes: RefCell<Vec<String>>,
    clock: Box<dyn Fn() -> DateTime<Utc>>,
}

#[derive(Clone, Debug)]
struct StoredCookie {
    value: String,
    expires: Option<DateTime<Utc>>,
}

impl Default for MemoryCookieJar {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl std::fmt::Debug for MemoryCookieJar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCookieJar")
            .field("cookies", &self.cookies.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        Self {
            cookies: RefCell::new(BTreeMap::new()),
            writes: RefCell::new(Vec::new()),
            clock: Box::new(clock),
        }
    }

    /// Every assignment string written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl CookieJar for MemoryCookieJar {
    fn read_all(&self) -> String {
        let now = (self.clock)();
        self.cookies
            .borrow()
            .iter()
            .filter(|(_, cookie)| cookie.expires.is_none_or(|at| at > now))
            .map(|(name, cookie)| format!("{name}={}", cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, assignment: &str) {
        self.writes.borrow_mut().push(assignment.to_string());

        let mut parts = assignment.split(';');
        let Some((name, value)) = parts.next().and_then(|p| p.split_once('=')) else {
            return;
        };

        let expires = parts.find_map(|attr| {
            let (key, value) = attr.split_once('=')?;
            if !key.trim().eq_ignore_ascii_case("expires") {
                return None;
            }
            DateTime::parse_from_rfc2822(value.trim())
                .ok()
                .map(|at| Utc.from_utc_datetime(&at.naive_utc()))
        });

        let name = name.trim().to_string();
        if expires.is_some_and(|at| at <= (self.clock)()) {
            self.cookies.borrow_mut().remove(&name);
        } else {
            self.cookies.borrow_mut().insert(
                name,
                StoredCookie {
                    value: value.trim().to_string(),
                    expires,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn store() -> SessionStore<MemoryCookieJar> {
        SessionStore::new(MemoryCookieJar::with_clock(fixed_now))
    }

    #[test]
    fn test_secure_flag_follows_protocol() {
        assert!(CookieOptions::session("https:", fixed_now()).secure);
        assert!(!CookieOptions::session("http:", fixed_now()).secure);
        assert!(!CookieOptions::session("file:", fixed_now()).secure);
        assert!(!CookieOptions::session("https", fixed_now()).secure);
    }

    #[test]
    fn test_session_options_defaults() {
        let options = CookieOptions::session("https:", fixed_now());
        assert_eq!(options.expires, fixed_now() + Duration::days(10));
        assert_eq!(options.path, "/");
        assert_eq!(options.same_site, SameSite::Strict);
    }

    #[test]
    fn test_attributes_rendering() {
        let options = CookieOptions::session("https:", fixed_now());
        assert_eq!(
            options.to_attributes(),
            "; expires=Mon, 11 Mar 2024 12:00:00 GMT; path=/; samesite=strict; secure"
        );
        let insecure = CookieOptions::session("http:", fixed_now());
        assert!(!insecure.to_attributes().contains("secure"));
    }

    #[test]
    fn test_set_then_get() {
        let store = store();
        let options = CookieOptions::session("https:", fixed_now());
        store.set(CookieKeys::AUTH, "abc.def", &options);
        assert_eq!(store.get(CookieKeys::AUTH).as_deref(), Some("abc.def"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let store = store();
        let options = CookieOptions::session("http:", fixed_now());
        store.set(CookieKeys::AUTH, "token", &options);
        store.remove(CookieKeys::AUTH, &options);

        assert_eq!(store.get(CookieKeys::AUTH), None);
        assert!(!store.is_authenticated());

        let last = store.jar().writes().pop().unwrap();
        assert!(last.starts_with("Auth-Token=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"));
    }

    #[test]
    fn test_values_round_trip_through_encoding() {
        let store = store();
        let options = CookieOptions::session("https:", fixed_now());
        let token = "a b;c=d,e%f";
        store.set(CookieKeys::REFRESH_TOKEN, token, &options);
        assert_eq!(store.get(CookieKeys::REFRESH_TOKEN).as_deref(), Some(token));
    }

    #[test]
    fn test_store_tokens_and_clear() {
        let store = store();
        let options = CookieOptions::session("https:", fixed_now());
        store.store_tokens(
            &SessionTokens {
                auth_token: "auth".into(),
                refresh_token: Some("refresh".into()),
            },
            &options,
        );
        assert_eq!(
            store.session(),
            SessionCookies {
                auth_token: Some("auth".into()),
                refresh_token: Some("refresh".into()),
            }
        );

        store.clear(&options);
        assert_eq!(store.session(), SessionCookies::default());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = store();
        store.set(CookieKeys::AUTH, "", &CookieOptions::session("https:", fixed_now()));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_cookie_expires_with_clock() {
        let now = std::rc::Rc::new(std::cell::Cell::new(fixed_now()));
        let clock = now.clone();
        let store = SessionStore::new(MemoryCookieJar::with_clock(move || clock.get()));
        store.set(CookieKeys::AUTH, "t", &CookieOptions::session("https:", fixed_now()));

        now.set(fixed_now() + Duration::days(9));
        assert!(store.is_authenticated());
        now.set(fixed_now() + Duration::days(10));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_parse_cookies_keeps_first_and_skips_junk() {
        let parsed = parse_cookies("a=1; junk; b=x%20y; a=2; =3");
        assert_eq!(parsed.get("a").map(String::as_str), Some("1"));
        assert_eq!(parsed.get("b").map(String::as_str), Some("x y"));
        assert_eq!(parsed.len(), 2);
    }
}
