//! Main application component
//!
//! Provides configuration, the toast queue and the authentication backend
//! through context, then hands over to the router.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use solofit_core::AppConfig;

use crate::components::ToastViewport;
use crate::router::AppRouter;
use crate::state::{AuthBackend, SharedProvider, Toaster};

pub const APP_TITLE: &str = "SoloFit: Level Up Your Body";
pub const APP_DESCRIPTION: &str = "A gamified fitness app inspired by Solo Leveling, designed to guide you to your dream physique through personalized daily challenges.";

/// Main application component with router integration
///
/// Without a `provider`, sign-in / sign-up / reset requests are validated and
/// then left pending.
#[component]
pub fn App(
    #[prop(optional)] config: Option<AppConfig>,
    #[prop(optional)] provider: Option<SharedProvider>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    provide_meta_context();
    provide_context(Toaster::new(config.toast.duration_ms));
    provide_context(AuthBackend::new(provider));
    provide_context(config);

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
        <div class="app-container">
            <main class="app-main">
                <AppRouter />
            </main>
            <ToastViewport />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }

    #[test]
    fn test_app_title() {
        assert_eq!(APP_TITLE, "SoloFit: Level Up Your Body");
    }
}
