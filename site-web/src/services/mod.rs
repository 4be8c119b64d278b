//! External collaborators: content store access

pub mod content;
