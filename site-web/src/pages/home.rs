//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-container" style="display: flex; justify-content: center; padding: 48px 24px;">
            <div class="card" style="width: 100%; max-width: 720px;">
                <h1 class="card-title" style="text-align: center; margin-bottom: 24px;">
                    "Welcome to Fizzbar"
                </h1>
                <p style="text-align: center; color: #555555; line-height: 1.8;">
                    "Everything above this line comes from the content store: the logo,
                    the menu, and the call-to-action are all editable without a deploy."
                </p>
            </div>
        </div>
    }
}
