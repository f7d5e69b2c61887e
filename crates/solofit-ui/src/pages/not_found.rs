//! 404 Not Found page component

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::error::UiError;
use crate::router::routes;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let message = move || UiError::RouteNotFound(location.pathname.get()).to_string();

    view! {
        <div class="not-found-page">
            <h1>"404 - Page Not Found"</h1>
            <p>{message}</p>
            <a href=routes::HOME>"Go to Home"</a>
        </div>
    }
}
