//! Application shell: router, shared configuration, and the navbar.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{AboutPage, HomePage};
use crate::state::content::provide_content_config;

#[component]
pub fn App() -> impl IntoView {
    provide_content_config();

    view! {
        <Router>
            // The navbar sits above the routed outlet so it renders on
            // every page, content permitting.
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}
