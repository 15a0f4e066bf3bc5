//! Bearer credential lookup.

/// Extract a credential value from a `cookie` header by its fixed cookie name.
///
/// The token is read once per fetch invocation. A missing or empty cookie
/// yields `None`; the fetch still goes out, just without an authorization
/// header.
pub fn credential_from_cookies(cookie_header: &str, cookie_name: &str) -> Option<String> {
    for cookie in cookie_header.split(';') {
        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
        if parts.len() == 2 && parts[0] == cookie_name && !parts[1].is_empty() {
            return Some(parts[1].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_found() {
        let token = credential_from_cookies("jwt_token=abc.def.ghi", "jwt_token");
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_credential_among_other_cookies() {
        let header = "theme=dark; jwt_token=tok-1; session=xyz";
        assert_eq!(
            credential_from_cookies(header, "jwt_token").as_deref(),
            Some("tok-1")
        );
    }

    #[test]
    fn test_credential_missing() {
        assert!(credential_from_cookies("theme=dark", "jwt_token").is_none());
    }

    #[test]
    fn test_empty_value_treated_as_absent() {
        assert!(credential_from_cookies("jwt_token=", "jwt_token").is_none());
    }
}
