//! Fizzbar Site - Leptos Frontend
//!
//! Client-side rendered marketing site whose navigation content is driven
//! by a headless content store.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panic messages in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Fizzbar site starting");

    // The static shell shows a loading placeholder until the wasm is live
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading placeholder from the static shell.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    if let Some(element) = document.get_element_by_id("site-loading") {
        if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
            if html_element.class_list().add_1("hidden").is_err() {
                log::warn!("Could not add 'hidden' class to loading screen");
            }
        }
        // Backup in case the stylesheet does not define .hidden
        if element.set_attribute("style", "display: none;").is_err() {
            log::warn!("Could not hide loading screen");
        }
    }
}
