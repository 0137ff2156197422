use url::Url;

/// Whether `value` is an absolute `http` or `https` URL with a host.
pub fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_http_url("https://cdn.example.com/photo.jpg"));
        assert!(is_http_url("http://example.com"));
    }

    #[test]
    fn test_rejects_other_schemes_and_relative_paths() {
        assert!(!is_http_url("ftp://example.com/file"));
        assert!(!is_http_url("/media/photo.jpg"));
        assert!(!is_http_url("not a url"));
    }
}
