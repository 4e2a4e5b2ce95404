//! URL route normalization shared by link matching and validation.

use std::borrow::Cow;

/// Whether a link points outside the site.
pub(crate) fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://") || link.starts_with("mailto:")
}

/// Normalize a site-relative link to the route it names.
///
/// Strips `#anchor` and `?query`, `.md`/`.html` suffixes and a trailing
/// `index`, and ensures a leading slash. Returns `None` for external links.
///
/// ```text
/// /pomodoro/countdown.md#step-1  ->  /pomodoro/countdown
/// /guide/index                   ->  /guide/
/// index.md                       ->  /
/// ```
pub(crate) fn normalize(link: &str) -> Option<String> {
    if is_external(link) {
        return None;
    }

    let end = link.find(['#', '?']).unwrap_or(link.len());
    let path = &link[..end];
    let path = path
        .strip_suffix(".md")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path);
    let path = match path.strip_suffix("index") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir,
        _ => path,
    };

    Some(with_leading_slash(path).into_owned())
}

/// Prepend `/` when missing.
pub(crate) fn with_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Directory part of a route, including the trailing slash.
pub(crate) fn section(route: &str) -> &str {
    route.rfind('/').map_or("/", |i| &route[..=i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_route() {
        assert_eq!(normalize("/pomodoro/countdown").as_deref(), Some("/pomodoro/countdown"));
    }

    #[test]
    fn test_normalize_strips_extension_and_anchor() {
        assert_eq!(
            normalize("/pomodoro/countdown.md#step-1").as_deref(),
            Some("/pomodoro/countdown")
        );
        assert_eq!(normalize("/snake/faq.html?x=1").as_deref(), Some("/snake/faq"));
    }

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize("/guide/index").as_deref(), Some("/guide/"));
        assert_eq!(normalize("/guide/index.md").as_deref(), Some("/guide/"));
        assert_eq!(normalize("index.md").as_deref(), Some("/"));
        assert_eq!(normalize("/").as_deref(), Some("/"));
    }

    #[test]
    fn test_normalize_keeps_names_ending_in_index() {
        assert_eq!(normalize("/api/reindex").as_deref(), Some("/api/reindex"));
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize("guide/first-chat").as_deref(), Some("/guide/first-chat"));
    }

    #[test]
    fn test_normalize_external() {
        assert_eq!(normalize("https://cursor.com"), None);
        assert_eq!(normalize("mailto:hi@example.com"), None);
    }

    #[test]
    fn test_section() {
        assert_eq!(section("/pomodoro/create-project"), "/pomodoro/");
        assert_eq!(section("/guide/"), "/guide/");
        assert_eq!(section("/about"), "/");
        assert_eq!(section("/"), "/");
    }
}
