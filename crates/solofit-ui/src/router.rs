//! Router configuration for the SoloFit UI
//!
//! Two addressable views, no query-parameter contract.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{AuthPage, Landing, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const AUTH: &str = "/auth";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Landing />
                <Route path=StaticSegment("auth") view=AuthPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::HOME, "/");
        assert_eq!(routes::AUTH, "/auth");
    }

    #[test]
    fn test_router_component_exists() {
        let _component = AppRouter;
    }

    #[test]
    fn test_all_page_components_exist() {
        let _landing = Landing;
        let _auth = AuthPage;
        let _not_found = NotFound;
    }
}
