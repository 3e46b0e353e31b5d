use std::time::Duration;

use leptos::prelude::*;

use crate::content::{Section, HERO_ROLES, OWNER_NAME, OWNER_SUMMARY, OWNER_TITLE};
use crate::particles::{self, Particle, HERO_SEED, LINK_DISTANCE, PARTICLE_COUNT, VIEWBOX};
use crate::theme::use_theme;

const ROLE_INTERVAL: Duration = Duration::from_millis(1500);

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let (role, set_role) = signal(0usize);

    // timers only exist in the browser
    Effect::new(move |_| {
        if let Ok(handle) = set_interval_with_handle(
            move || set_role.update(|i| *i = (*i + 1) % HERO_ROLES.len()),
            ROLE_INTERVAL,
        ) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <section id=Section::Home.id() class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <div class=move || {
                    format!(
                        "absolute inset-0 {}",
                        theme
                            .get()
                            .pick(
                                "bg-gradient-to-br from-surface-dark via-[#1a1040] to-surface-dark",
                                "bg-gradient-to-br from-surface-light via-indigo-50 to-cyan-50",
                            ),
                    )
                } />
                <div class=move || {
                    format!(
                        "absolute top-20 -left-32 w-96 h-96 rounded-full blur-3xl animate-pulse {}",
                        theme.get().pick("bg-primary/20", "bg-primary/10"),
                    )
                } />
                <div
                    class=move || {
                        format!(
                            "absolute bottom-20 -right-32 w-96 h-96 rounded-full blur-3xl animate-pulse {}",
                            theme.get().pick("bg-accent/20", "bg-accent/10"),
                        )
                    }
                    style="animation-delay: 2s"
                />
            </div>
            <ParticleField />
            <div class="relative z-10 text-center px-4 max-w-4xl mx-auto fade-in-up">
                <p class=move || {
                    format!(
                        "inline-block px-4 py-1.5 rounded-full text-sm font-medium mb-6 {}",
                        theme
                            .get()
                            .pick(
                                "bg-primary/10 text-primary-light border border-primary/20",
                                "bg-primary/5 text-primary-dark border border-primary/15",
                            ),
                    )
                }>"👋 Welcome to my portfolio"</p>
                <h1 class="text-4xl sm:text-5xl lg:text-7xl font-bold font-display mb-4">
                    "Hi, I'm " <span class="gradient-text">{OWNER_NAME}</span>
                </h1>
                <p class=move || {
                    format!(
                        "text-lg sm:text-xl lg:text-2xl font-medium mb-3 {}",
                        theme.get().pick("text-gray-300", "text-gray-600"),
                    )
                }>{OWNER_TITLE}</p>
                <div class="text-lg sm:text-xl lg:text-2xl font-medium mb-6">
                    <span class=move || {
                        theme.get().pick("text-gray-400", "text-gray-500")
                    }>"I work with "</span>
                    <span class="gradient-text font-bold typing-caret">
                        {move || HERO_ROLES[role.get()]}
                    </span>
                </div>
                <p class=move || {
                    format!(
                        "text-base sm:text-lg max-w-2xl mx-auto mb-10 leading-relaxed {}",
                        theme.get().pick("text-gray-400", "text-gray-500"),
                    )
                }>{OWNER_SUMMARY}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href=Section::Contact.anchor()
                        class="px-8 py-3.5 bg-gradient-to-r from-primary to-accent rounded-xl text-white font-semibold shadow-lg shadow-primary/25 hover:shadow-xl hover:shadow-primary/30 transition-shadow flex items-center gap-2"
                    >
                        "✉ Contact Me"
                    </a>
                    <a
                        href=Section::About.anchor()
                        class=move || {
                            format!(
                                "px-8 py-3.5 rounded-xl font-semibold border transition-all flex items-center gap-2 {}",
                                theme
                                    .get()
                                    .pick(
                                        "border-white/20 text-white hover:bg-white/5",
                                        "border-gray-300 text-gray-700 hover:bg-gray-50",
                                    ),
                            )
                        }
                    >
                        "↓ Learn More"
                    </a>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <div class=move || {
                    format!(
                        "w-6 h-10 rounded-full border-2 flex justify-center pt-2 scroll-bob {}",
                        theme.get().pick("border-white/30", "border-gray-400"),
                    )
                }>
                    <div class="w-1.5 h-1.5 rounded-full bg-primary scroll-dot" />
                </div>
            </div>
        </section>
    }
}

/// Animated dots and links behind the hero copy. Motion is pure CSS.
#[component]
fn ParticleField() -> impl IntoView {
    let theme = use_theme();
    let field = particles::field(PARTICLE_COUNT, HERO_SEED);
    let links = particles::links(&field, LINK_DISTANCE);
    let color = move || theme.get().pick("#6366f1", "#818cf8");

    let link_views = links
        .into_iter()
        .map(|link| {
            let (a, b) = (field[link.from], field[link.to]);
            view! {
                <line
                    x1=coord(a.x)
                    y1=coord(a.y)
                    x2=coord(b.x)
                    y2=coord(b.y)
                    stroke=color
                    stroke-width="0.1"
                    stroke-opacity=coord(0.15 * link.strength)
                />
            }
        })
        .collect_view();
    let dot_views = field
        .iter()
        .map(|p: &Particle| {
            let style = format!(
                "animation-duration: {:.1}s; animation-delay: -{:.1}s",
                p.drift_secs, p.delay_secs
            );
            view! {
                <circle
                    class="particle"
                    cx=coord(p.x)
                    cy=coord(p.y)
                    r=coord(p.radius)
                    fill=color
                    fill-opacity=coord(p.opacity)
                    style=style
                />
            }
        })
        .collect_view();

    view! {
        <svg
            id="hero-particles"
            class="absolute inset-0 z-[1] w-full h-full"
            viewBox=format!("0 0 {VIEWBOX} {VIEWBOX}")
            preserveAspectRatio="xMidYMid slice"
            aria-hidden="true"
        >
            {link_views}
            {dot_views}
        </svg>
    }
}

fn coord(v: f32) -> String {
    format!("{v:.2}")
}
