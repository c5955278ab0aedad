// src/utils/url.rs

//! URL manipulation utilities.

/// Resolve a store path against the storefront origin.
///
/// Paths that already carry `https://` are returned as-is; anything else is
/// treated as relative to the origin.
///
/// # Examples
/// ```
/// use lti_tracker::utils::url::resolve;
///
/// assert_eq!(
///     resolve("https://robertsspaceindustries.com", "/pledge/Idris"),
///     "https://robertsspaceindustries.com/pledge/Idris"
/// );
/// ```
pub fn resolve(origin: &str, path: &str) -> String {
    if path.contains("https://") {
        return path.to_string();
    }
    format!("{origin}{path}")
}

/// Resolve an optional store path, substituting `fallback` when it is absent.
pub fn resolve_or(origin: &str, path: Option<&str>, fallback: &str) -> String {
    match path {
        Some(path) => resolve(origin, path),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://robertsspaceindustries.com";
    const FALLBACK: &str = "https://www.google.com/images/errors/robot.png";

    #[test]
    fn test_resolve_absolute_url() {
        assert_eq!(resolve(ORIGIN, "https://x.com/a"), "https://x.com/a");
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve(ORIGIN, "/pledge/foo"),
            "https://robertsspaceindustries.com/pledge/foo"
        );
    }

    #[test]
    fn test_resolve_requires_https_marker() {
        assert_eq!(
            resolve(ORIGIN, "http://x.com/a"),
            "https://robertsspaceindustries.comhttp://x.com/a"
        );
    }

    #[test]
    fn test_resolve_or_fallback() {
        assert_eq!(resolve_or(ORIGIN, None, FALLBACK), FALLBACK);
        assert_eq!(
            resolve_or(ORIGIN, Some("/media/a.jpg"), FALLBACK),
            "https://robertsspaceindustries.com/media/a.jpg"
        );
    }
}
