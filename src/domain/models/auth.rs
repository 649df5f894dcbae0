//! `Authorization` header derivation for URL-backed sources.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Which HTTP authentication scheme a derived header uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Basic base64(user:password)`
    Basic,
    /// `Bearer token`
    Bearer,
}

impl AuthScheme {
    /// Lowercase scheme name, safe to log.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Bearer => "bearer",
        }
    }
}

/// A derived `Authorization` header value together with its scheme.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    scheme: AuthScheme,
    value: String,
}

impl AuthHeader {
    /// The scheme this header uses.
    pub const fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// The full header value, e.g. `Bearer tok123`.
    pub fn value(&self) -> &str {
        &self.value
    }
}

// The value carries a secret.
impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeader")
            .field("scheme", &self.scheme)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Returns true when `value` is absent, empty, or whitespace only.
///
/// Whitespace excludes the no-break spaces (U+00A0, U+2007, U+202F) and
/// includes the separator controls U+001C to U+001F, so `" \u{a0} "` is not
/// blank.
pub fn is_blank(value: Option<&str>) -> bool {
    non_blank(value).is_none()
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        '\u{1c}'..='\u{1f}' => true,
        _ => c.is_whitespace(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.chars().all(is_blank_char))
}

/// Derive the `Authorization` header value from optional credentials.
///
/// Basic wins when both `user` and `password` are non-blank, regardless of
/// `token`. Otherwise a non-blank `token` yields a Bearer header. Returns
/// `None` when neither applies.
pub fn derive_auth_header(
    user: Option<&str>,
    password: Option<&str>,
    token: Option<&str>,
) -> Option<AuthHeader> {
    if let (Some(user), Some(password)) = (non_blank(user), non_blank(password)) {
        let encoded = STANDARD.encode(format!("{user}:{password}").as_bytes());
        return Some(AuthHeader {
            scheme: AuthScheme::Basic,
            value: format!("Basic {encoded}"),
        });
    }

    non_blank(token).map(|token| AuthHeader {
        scheme: AuthScheme::Bearer,
        value: format!("Bearer {token}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_wins_over_token() {
        let header = derive_auth_header(Some("alice"), Some("secret"), Some("tok123")).unwrap();
        assert_eq!(header.scheme(), AuthScheme::Basic);
        assert_eq!(header.value(), format!("Basic {}", STANDARD.encode("alice:secret")));
        assert_eq!(header.value(), "Basic YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn test_token_only() {
        let header = derive_auth_header(None, None, Some("tok123")).unwrap();
        assert_eq!(header.scheme(), AuthScheme::Bearer);
        assert_eq!(header.value(), "Bearer tok123");
    }

    #[test]
    fn test_user_without_password_is_unauthenticated() {
        assert!(derive_auth_header(Some("alice"), None, None).is_none());
    }

    #[test]
    fn test_blank_password_falls_back_to_token() {
        let header = derive_auth_header(Some("alice"), Some("   "), Some("tok123")).unwrap();
        assert_eq!(header.value(), "Bearer tok123");
    }

    #[test]
    fn test_blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" \t\n")));
        assert!(!is_blank(Some(" a ")));
        assert!(derive_auth_header(Some(""), Some(""), Some(" ")).is_none());
    }

    #[test]
    fn test_no_break_space_is_not_blank() {
        assert!(!is_blank(Some("\u{a0}")));
        assert!(!is_blank(Some(" \u{202f} ")));
        assert!(is_blank(Some("\u{2003}\u{1f}")));

        let header = derive_auth_header(None, None, Some("\u{a0}")).unwrap();
        assert_eq!(header.value(), "Bearer \u{a0}");
    }

    #[test]
    fn test_basic_encodes_utf8() {
        let header = derive_auth_header(Some("jürgen"), Some("pässword"), None).unwrap();
        let payload = header.value().strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "jürgen:pässword");
    }

    #[test]
    fn test_debug_redacts_value() {
        let header = derive_auth_header(None, None, Some("tok123")).unwrap();
        let debug = format!("{header:?}");
        assert!(!debug.contains("tok123"));
        assert!(debug.contains("Bearer"));
    }
}
