//! # Shared Utility Functions
//!
//! URL helpers used by the query builder and by rendering code that must
//! resolve media asset paths.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::join_url;
//!
//! assert_eq!(
//!     join_url("http://localhost:1337/", "/api/coca-cola-header"),
//!     "http://localhost:1337/api/coca-cola-header"
//! );
//! ```

/// Join a base URL with a path, normalizing the slash between them.
///
/// # Examples
///
/// ```rust
/// use shared::utils::join_url;
///
/// assert_eq!(join_url("http://cms.local", "/api/x"), "http://cms.local/api/x");
/// assert_eq!(join_url("http://cms.local/", "api/x"), "http://cms.local/api/x");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Resolve a media asset URL against the content store's base URL.
///
/// The content store returns upload paths relative to its own host
/// (`/uploads/logo.png`); absolute URLs (external CDN) pass through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::media_url;
///
/// assert_eq!(
///     media_url("http://cms.local", "/uploads/logo.png"),
///     "http://cms.local/uploads/logo.png"
/// );
/// assert_eq!(
///     media_url("http://cms.local", "https://cdn.example.com/logo.png"),
///     "https://cdn.example.com/logo.png"
/// );
/// ```
pub fn media_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        join_url(base, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_slash_variants() {
        assert_eq!(join_url("http://a", "/b"), "http://a/b");
        assert_eq!(join_url("http://a/", "/b"), "http://a/b");
        assert_eq!(join_url("http://a/", "b"), "http://a/b");
        assert_eq!(join_url("http://a", "b"), "http://a/b");
    }

    #[test]
    fn test_media_url_relative() {
        assert_eq!(
            media_url("http://cms.local", "/uploads/x.png"),
            "http://cms.local/uploads/x.png"
        );
    }

    #[test]
    fn test_media_url_absolute_passthrough() {
        assert_eq!(
            media_url("http://cms.local", "https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }
}
