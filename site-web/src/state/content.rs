//! Content store configuration, shared through Leptos context.

use leptos::prelude::*;

use crate::utils::constants::CONTENT_API_BASE;

/// Where the headless content store lives.
#[derive(Clone)]
pub struct ContentConfig {
    pub base_url: String,
}

impl ContentConfig {
    pub fn new() -> Self {
        Self {
            base_url: CONTENT_API_BASE.to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_content_config() -> ContentConfig {
    let config = ContentConfig::new();
    provide_context(config.clone());
    config
}

pub fn use_content_config() -> ContentConfig {
    expect_context::<ContentConfig>()
}
