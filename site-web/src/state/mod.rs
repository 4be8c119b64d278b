//! Application state: configuration context and view-state models

pub mod content;
pub mod nav;
