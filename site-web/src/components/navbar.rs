//! Navigation Bar Component
//!
//! The navbar's content (logo, link list, call-to-action) is not
//! hard-coded: it is fetched once per mount from the content store and
//! rendered from the resulting [`NavigationDocument`]. Until the fetch
//! settles, and whenever no usable document comes back, the navbar renders
//! nothing at all rather than a skeleton or an error surface.
//!
//! [`NavigationDocument`]: shared::dto::navigation::NavigationDocument

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::navigation::NavLink;
use shared::utils::media_url;

use crate::services::content::fetch_navigation;
use crate::state::content::use_content_config;
use crate::state::nav::NavState;

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_content_config();
    let (nav, set_nav) = signal(NavState::Pending);

    // The component body runs once per mount, so exactly one request is
    // issued regardless of how often the view re-renders.
    let base_url = config.base_url.clone();
    leptos::task::spawn_local(async move {
        let document = fetch_navigation(&base_url).await;
        // try_set: if the navbar unmounted before the response settled,
        // the signal is disposed and the result is dropped.
        set_nav.try_set(NavState::settled(document));
    });

    let cms_base = config.base_url;
    move || match nav.get() {
        // Pending and Absent are indistinguishable to the end user
        NavState::Pending | NavState::Absent => ().into_any(),
        NavState::Ready(document) => {
            let topnav = document.topnav;
            let logo = topnav.logo_link;
            let logo_src = media_url(&cms_base, &logo.image.url);
            let logo_alt = logo
                .image
                .alternative_text
                .unwrap_or_else(|| logo.image.name.clone());

            view! {
                <nav class="topnav">
                    <A href=logo.href attr:class="nav-logo">
                        <img src=logo_src alt=logo_alt/>
                        <span class="nav-title">{logo.text}</span>
                    </A>
                    <ul class="nav-links">
                        {topnav
                            .links
                            .into_iter()
                            .map(|link| view! { <li class="nav-item">{nav_anchor(link, "nav-link")}</li> })
                            .collect_view()}
                    </ul>
                    {nav_anchor(topnav.cta, "nav-cta")}
                </nav>
            }
            .into_any()
        }
    }
}

/// Render one navigable entry. External links open a new browsing context;
/// internal ones go through the router.
fn nav_anchor(link: NavLink, class: &'static str) -> AnyView {
    if link.external {
        view! {
            <a href=link.href class=class target="_blank" rel="noopener noreferrer">
                {link.text}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=link.href attr:class=class>{link.text}</A>
        }
        .into_any()
    }
}
