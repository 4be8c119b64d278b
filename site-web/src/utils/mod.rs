//! Application utilities

pub mod constants;
