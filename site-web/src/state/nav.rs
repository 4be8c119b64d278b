//! Navbar view state.
//!
//! Each mounted navbar owns exactly one `NavState` signal and issues
//! exactly one request, so the only transition is `Pending` to one of the
//! two settled states. Settled states are terminal for the mount.

use shared::dto::navigation::NavigationDocument;

/// Three-state view model for the navbar's single fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum NavState {
    /// Request outstanding; nothing rendered yet.
    Pending,
    /// Settled with no usable document; renders the same as `Pending`.
    Absent,
    /// Settled with a well-formed document.
    Ready(NavigationDocument),
}

impl NavState {
    /// Transition taken when the single outstanding request settles.
    pub fn settled(document: Option<NavigationDocument>) -> Self {
        match document {
            Some(doc) => NavState::Ready(doc),
            None => NavState::Absent,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, NavState::Pending)
    }

    /// Document to render, if any. `None` means an empty navbar.
    pub fn document(&self) -> Option<&NavigationDocument> {
        match self {
            NavState::Ready(doc) => Some(doc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::navigation::Envelope;

    fn sample_document() -> NavigationDocument {
        let body = r#"{
            "data": {
                "id": 1,
                "title": "Header",
                "description": "Site navigation",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z",
                "publishedAt": "2024-01-01T00:00:00.000Z",
                "topnav": {
                    "id": 1,
                    "logoLink": {
                        "id": 1,
                        "text": "Fizzbar",
                        "href": "/",
                        "image": { "id": 3, "url": "/uploads/logo.png", "alternativeText": "Fizzbar logo", "name": "logo.png" }
                    },
                    "link": [],
                    "cta": { "id": 7, "href": "/signup", "text": "Sign up", "external": false }
                }
            }
        }"#;
        serde_json::from_str::<Envelope<NavigationDocument>>(body)
            .unwrap()
            .data
            .unwrap()
    }

    #[test]
    fn settled_without_document_is_absent() {
        let state = NavState::settled(None);
        assert_eq!(state, NavState::Absent);
        assert!(state.is_settled());
        assert!(state.document().is_none());
    }

    #[test]
    fn settled_with_document_is_ready() {
        let state = NavState::settled(Some(sample_document()));
        assert!(state.is_settled());
        let doc = state.document().unwrap();
        assert_eq!(doc.topnav.cta.text, "Sign up");
    }

    #[test]
    fn pending_renders_nothing() {
        let state = NavState::Pending;
        assert!(!state.is_settled());
        assert!(state.document().is_none());
    }

    #[test]
    fn empty_link_list_still_exposes_logo_and_cta() {
        let state = NavState::settled(Some(sample_document()));
        let doc = state.document().unwrap();
        assert!(doc.topnav.links.is_empty());
        assert_eq!(doc.topnav.logo_link.text, "Fizzbar");
        assert_eq!(doc.topnav.cta.href, "/signup");
    }
}
