/// Filesystem- and DOM-safe identifier derived from a page URL.
///
/// Chart filenames and dashboard section anchors are both named from this,
/// so both sides must call this one function: strip the scheme prefix, then
/// replace every `/` and `.` with `_`.
pub fn sanitize_url(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .replace(['/', '.'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url() {
        assert_eq!(sanitize_url("https://example.com/page"), "example_com_page");
    }

    #[test]
    fn test_http_url() {
        assert_eq!(sanitize_url("http://a.b/c"), "a_b_c");
    }

    #[test]
    fn test_no_scheme() {
        assert_eq!(sanitize_url("site.org/x/y"), "site_org_x_y");
    }

    #[test]
    fn test_deterministic_for_distinct_urls() {
        let a = sanitize_url("https://site.org");
        let b = sanitize_url("https://site.org/about");
        assert_eq!(a, "site_org");
        assert_ne!(a, b);
    }
}
