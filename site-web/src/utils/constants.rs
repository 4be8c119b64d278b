//! Application constants

/// Root URL of the headless content store.
///
/// Overridable at compile time with the `STRAPI_URL` environment variable;
/// defaults to a local development instance.
pub const CONTENT_API_BASE: &str = match option_env!("STRAPI_URL") {
    Some(url) => url,
    None => "http://localhost:1337",
};
