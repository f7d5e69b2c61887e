//! Landing page component
//!
//! Hero with two calls to action leading to the auth screen, followed by the
//! four-card features grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::FeatureCard;
use crate::router::routes;

/// A feature card on the landing page: `(icon, title, description)`.
pub type Feature = (&'static str, &'static str, &'static str);

/// Features shown in the "Your Fitness, Gamified" grid.
pub const FEATURES: [Feature; 4] = [
    (
        "🏆",
        "Level Up System",
        "Earn XP and level up as you complete workouts and hit your goals",
    ),
    (
        "📈",
        "Track Progress",
        "Monitor your body measurements, weight, and fitness journey",
    ),
    (
        "⚡",
        "Daily Challenges",
        "Get personalized workouts that adapt to your fitness level",
    ),
    (
        "🎯",
        "Goal Setting",
        "Set and achieve your fitness goals with smart tracking",
    ),
];

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="hero" aria-label="Hero section">
                <div class="hero-overlay" />
                <div class="hero-content">
                    <h1 class="hero-title">"Level Up Your Body with SoloFit"</h1>
                    <p class="hero-subtitle">
                        "Transform into your strongest self with personalized daily challenges, "
                        "tailored to your body and goals. Crush workouts, stay hydrated, and "
                        "track your progress like a true Shadow Monarch."
                    </p>
                    <div class="hero-actions">
                        <A href=routes::AUTH attr:class="btn btn-primary btn-lg">
                            "Start Your Journey"
                        </A>
                        <A href=routes::AUTH attr:class="btn btn-outline btn-lg">
                            "Sign In"
                        </A>
                    </div>
                    <div class="hero-scroll-hint" aria-hidden="true">"⌄"</div>
                </div>
            </section>

            <section class="features" aria-labelledby="features-heading">
                <h2 id="features-heading" class="features-heading">"Your Fitness, Gamified"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| {
                            view! { <FeatureCard icon=icon title=title description=description /> }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
