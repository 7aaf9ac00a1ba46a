/// Reads a cookie value out of a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Anti-forgery token: the cookie wins, the meta tag is the fallback.
pub fn resolve_token(cookies: &str, cookie_name: &str, meta_content: Option<&str>) -> Option<String> {
    cookie_value(cookies, cookie_name).or_else(|| {
        meta_content
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let cookies = "session=abc; csrf_token=tok%3D123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrf_token").as_deref(), Some("tok=123"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn cookie_beats_meta() {
        let token = resolve_token("csrf_token=from-cookie", "csrf_token", Some("from-meta"));
        assert_eq!(token.as_deref(), Some("from-cookie"));
    }

    #[test]
    fn falls_back_to_meta_then_none() {
        assert_eq!(
            resolve_token("session=abc", "csrf_token", Some(" from-meta ")).as_deref(),
            Some("from-meta")
        );
        assert_eq!(resolve_token("csrf_token=", "csrf_token", Some("")), None);
        assert_eq!(resolve_token("", "csrf_token", None), None);
    }
}
