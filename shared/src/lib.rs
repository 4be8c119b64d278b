//! # Shared Content Contract Library
//!
//! This library defines the contract between the site frontend and the
//! headless content store (a Strapi-style API). All DTOs use JSON
//! serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects mirroring the content API wire format
//!   - **[`dto::navigation`]**: Navigation single-type and its nested components
//! - **[`query`]**: Populate-query construction (qs-style bracket encoding)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::join_url`]**: Join a base URL with a path segment
//!   - **[`utils::media_url`]**: Resolve possibly-relative media asset URLs
//!
//! ## Wire Format
//!
//! The content store returns Strapi v5 flattened documents inside a
//! `{ "data": ..., "meta": ... }` envelope:
//! - Field names are **camelCase** on the wire, mapped to snake_case in Rust
//!   via `#[serde(rename_all = "camelCase")]`
//! - Nullable fields (e.g. an image's `alternativeText`) deserialize to `Option`
//! - Timestamps are ISO 8601 and deserialize to `chrono::DateTime<Utc>`
//!
//! ## Usage in the frontend
//!
//! ```rust
//! use shared::query::navigation_url;
//! use shared::dto::navigation::{Envelope, NavigationDocument};
//!
//! let url = navigation_url("http://localhost:1337");
//! assert!(url.starts_with("http://localhost:1337/api/coca-cola-header?"));
//!
//! let body = r#"{ "data": null, "meta": {} }"#;
//! let envelope: Envelope<NavigationDocument> = serde_json::from_str(body).unwrap();
//! assert!(envelope.data.is_none());
//! ```

pub mod dto;
pub mod query;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a contract library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
