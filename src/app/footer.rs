use leptos::prelude::*;

use crate::content::{Section, OWNER_NAME, SOCIAL_LINKS};
use crate::theme::use_theme;

use super::navbar::Logo;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    view! {
        <footer class=move || {
            format!(
                "relative py-12 px-4 border-t {}",
                theme.get().pick("bg-surface-dark border-white/5", "bg-white border-gray-100"),
            )
        }>
            <div class="max-w-6xl mx-auto">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-6">
                    <Logo />
                    <p class=move || {
                        format!(
                            "text-sm flex items-center gap-1.5 {}",
                            theme.get().pick("text-gray-500", "text-gray-400"),
                        )
                    }>
                        {format!("© {BUILD_YEAR} {OWNER_NAME}. Made with")}
                        <span class="text-red-500">"♥"</span>
                        "All rights reserved."
                    </p>
                    <div class="flex items-center gap-3">
                        <SocialIcons />
                        <a
                            href=Section::Home.anchor()
                            aria-label="Back to top"
                            class="w-10 h-10 rounded-lg bg-gradient-to-r from-primary to-accent flex items-center justify-center text-white shadow-lg shadow-primary/20 hover:-translate-y-1 transition-transform"
                        >
                            "↑"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn SocialIcons() -> impl IntoView {
    let theme = use_theme();
    SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label
                    class=move || {
                        format!(
                            "w-10 h-10 rounded-lg flex items-center justify-center transition-colors hover:-translate-y-1 {}",
                            theme
                                .get()
                                .pick(
                                    "bg-white/5 text-gray-400 hover:text-white hover:bg-white/10",
                                    "bg-gray-100 text-gray-500 hover:text-gray-900 hover:bg-gray-200",
                                ),
                        )
                    }
                >
                    <i class=link.icon />
                </a>
            }
        })
        .collect_view()
}
