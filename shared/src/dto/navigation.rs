use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON envelope wrapping every content-store response.
///
/// `data` is `null` when the requested document does not exist (unpublished
/// single-type, deleted entry), which deserializes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    /// Envelope-level metadata (pagination etc.), not inspected.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// Root document of the navigation single-type.
///
/// Identity, title, and timestamps are informational; rendering only uses
/// [`topnav`](NavigationDocument::topnav).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDocument {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub topnav: TopNav,
    /// Open-ended side-channel from the CMS, passed through untouched.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// The navigation payload: logo, ordered link list, and call-to-action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopNav {
    pub id: i64,
    pub logo_link: LogoLink,
    /// Display order is wire order. May be empty; the navbar then degrades
    /// to logo + cta only.
    #[serde(rename = "link", default)]
    pub links: Vec<NavLink>,
    pub cta: NavLink,
}

/// The site logo and its click target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogoLink {
    pub id: i64,
    pub text: String,
    pub href: String,
    pub image: ImageAsset,
}

/// A single navigable entry. `external` selects new-tab behavior when the
/// link is rendered; it has no effect on fetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub id: i64,
    pub href: String,
    pub text: String,
    pub external: bool,
}

/// Uploaded media descriptor, restricted to the scalar fields the navbar
/// query selects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub id: i64,
    pub url: String,
    pub alternative_text: Option<String>,
    pub name: String,
}
