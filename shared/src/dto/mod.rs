//! # Data Transfer Objects (DTOs)
//!
//! This module contains the data structures returned by the headless content
//! store's REST API.
//!
//! ## Module Organization
//!
//! - [`navigation`] - The navigation single-type: document root, top nav,
//!   links, and image assets
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON deserialization:
//!
//! - **Field naming**: camelCase on the wire via `#[serde(rename_all = "camelCase")]`
//! - **Nullable fields**: Deserialize to `Option`
//! - **Unknown fields**: Ignored (default serde behavior), so additive CMS
//!   schema changes do not break the frontend
//!
//! ## Example Response
//!
//! ```text
//! GET /api/coca-cola-header?populate[...]
//!
//! {
//!   "data": {
//!     "id": 1,
//!     "title": "Header",
//!     "description": "Site navigation",
//!     "createdAt": "2024-01-01T00:00:00.000Z",
//!     "updatedAt": "2024-01-02T00:00:00.000Z",
//!     "publishedAt": "2024-01-02T00:00:00.000Z",
//!     "topnav": {
//!       "id": 1,
//!       "logoLink": { "id": 1, "text": "Home", "href": "/", "image": { ... } },
//!       "link": [ { "id": 2, "href": "/products", "text": "Products", "external": false } ],
//!       "cta": { "id": 7, "href": "/signup", "text": "Sign up", "external": false }
//!     },
//!     "meta": {}
//!   },
//!   "meta": {}
//! }
//! ```

pub mod navigation;

pub use navigation::*;
