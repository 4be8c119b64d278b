//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-container" style="display: flex; justify-content: center; padding: 48px 24px;">
            <div class="card" style="width: 100%; max-width: 720px;">
                <h1 class="card-title" style="text-align: center; margin-bottom: 24px;">
                    "About this site"
                </h1>
                <p style="color: #555555; line-height: 1.8; margin-bottom: 16px;">
                    "This is a demo storefront whose page chrome is driven by a headless
                    content store. Editors manage the navigation in the CMS; the site
                    fetches a fully-joined navigation document in a single request on
                    page load."
                </p>
                <p style="color: #555555; line-height: 1.8;">
                    "If the content store is unreachable the navigation degrades to an
                    empty bar rather than an error message."
                </p>
            </div>
        </div>
    }
}
