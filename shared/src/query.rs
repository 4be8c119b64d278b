//! # Populate-Query Construction
//!
//! Headless content APIs return only directly-owned scalar fields unless
//! related entities are explicitly requested. The navbar needs its logo
//! image, link list, and call-to-action expanded inline so a single round
//! trip suffices, which the API expresses as a nested `populate` tree in
//! the query string using qs-style bracket syntax:
//!
//! ```text
//! populate[topnav][populate][logoLink][populate][image][fields][0]=url
//! ```
//!
//! The tree is written as `serde_json::Value` data and flattened by
//! [`stringify`], which sorts the flattened pairs lexicographically. The
//! output is canonical: the same tree always serializes to the same string.

use serde_json::{json, Value};

/// Collection path of the navigation single-type on the content store.
pub const NAVIGATION_PATH: &str = "/api/coca-cola-header";

/// Canonical query string requesting a fully-joined navigation document.
///
/// Expands `topnav`, its `logoLink` (with only the `url`,
/// `alternativeText`, and `name` scalars of the image asset), and the
/// `link` and `cta` components. Pure and idempotent.
pub fn navigation_query() -> String {
    let tree = json!({
        "populate": {
            "topnav": {
                "populate": {
                    "logoLink": {
                        "populate": {
                            "image": {
                                "fields": ["url", "alternativeText", "name"],
                            },
                        },
                    },
                    "link": { "populate": true },
                    "cta": { "populate": true },
                },
            },
        },
    });
    stringify(&tree)
}

/// Absolute URL of the navigation document, populate query included.
///
/// Tolerates a trailing slash on `base_url`.
pub fn navigation_url(base_url: &str) -> String {
    format!(
        "{}?{}",
        crate::utils::join_url(base_url, NAVIGATION_PATH),
        navigation_query()
    )
}

/// Flatten a JSON value into a qs-style query string.
///
/// Object keys become bracketed path segments, array elements are indexed
/// (`[0]`, `[1]`, ...), and scalars terminate a pair. Keys and values are
/// percent-encoded, so brackets appear as `%5B`/`%5D` on the wire. `null`
/// values are skipped.
pub fn stringify(value: &Value) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    flatten(value, String::new(), &mut pairs);
    // Canonical order must not depend on the map backing serde_json was
    // compiled with, so sort the flattened pairs explicitly.
    pairs.sort();
    pairs
        .iter()
        .map(|(key, val)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(val))
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn flatten(value: &Value, prefix: String, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}[{key}]")
                };
                flatten(child, path, pairs);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(child, format!("{prefix}[{index}]"), pairs);
            }
        }
        Value::Null => {}
        Value::Bool(flag) => pairs.push((prefix, flag.to_string())),
        Value::Number(num) => pairs.push((prefix, num.to_string())),
        Value::String(text) => pairs.push((prefix, text.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode a produced query back into `(path, value)` pairs.
    fn decoded_pairs(query: &str) -> Vec<(String, String)> {
        query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn navigation_query_is_canonical() {
        let expected = [
            ("populate[topnav][populate][cta][populate]", "true"),
            ("populate[topnav][populate][link][populate]", "true"),
            (
                "populate[topnav][populate][logoLink][populate][image][fields][0]",
                "url",
            ),
            (
                "populate[topnav][populate][logoLink][populate][image][fields][1]",
                "alternativeText",
            ),
            (
                "populate[topnav][populate][logoLink][populate][image][fields][2]",
                "name",
            ),
        ];
        let pairs = decoded_pairs(&navigation_query());
        assert_eq!(pairs.len(), expected.len());
        for ((key, value), (expected_key, expected_value)) in pairs.iter().zip(expected) {
            assert_eq!(key, expected_key);
            assert_eq!(value, expected_value);
        }
    }

    #[test]
    fn navigation_query_is_idempotent() {
        assert_eq!(navigation_query(), navigation_query());
    }

    #[test]
    fn brackets_are_percent_encoded() {
        let query = navigation_query();
        assert!(!query.contains('['));
        assert!(!query.contains(']'));
        assert!(query.contains("%5Btopnav%5D"));
    }

    #[test]
    fn navigation_url_has_fixed_path() {
        let url = navigation_url("http://localhost:1337");
        assert!(url.starts_with("http://localhost:1337/api/coca-cola-header?"));

        // Trailing slash on the base must not double up
        let url = navigation_url("http://localhost:1337/");
        assert!(url.starts_with("http://localhost:1337/api/coca-cola-header?"));
    }

    #[test]
    fn stringify_handles_scalars_and_arrays() {
        let value = json!({
            "page": 2,
            "draft": false,
            "tags": ["a", "b"],
            "skip": null,
        });
        assert_eq!(
            stringify(&value),
            "draft=false&page=2&tags%5B0%5D=a&tags%5B1%5D=b"
        );
    }

    #[test]
    fn stringify_empty_object_is_empty() {
        assert_eq!(stringify(&json!({})), "");
    }
}
