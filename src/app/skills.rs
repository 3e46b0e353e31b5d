use leptos::prelude::*;

use crate::content::{Section, SKILL_CATEGORIES};
use crate::theme::use_theme;

use super::section::SectionHeader;

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section
            id=Section::Skills.id()
            class=move || format!("py-24 px-4 {}", theme.get().pick("bg-surface-dark-2", "bg-gray-50"))
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeader lead="My" accent="Skills" />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, cat)| {
                            let style = format!("animation-delay: {}ms", i * 100);
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "group relative glass rounded-2xl p-6 overflow-hidden cursor-default transition-all duration-300 hover:glow hover:-translate-y-2 fade-in-up {}",
                                            theme.get().pick("", "bg-white/80 border-gray-200/50"),
                                        )
                                    }
                                    style=style
                                >
                                    <div class=format!(
                                        "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-10 transition-opacity duration-300 rounded-2xl",
                                        cat.gradient,
                                    ) />
                                    <div class="relative z-10">
                                        <div class=format!(
                                            "w-12 h-12 rounded-xl bg-gradient-to-r {} flex items-center justify-center text-white text-xl mb-4",
                                            cat.gradient,
                                        )>{cat.glyph}</div>
                                        <h3 class="text-lg font-bold mb-3">{cat.title}</h3>
                                        <div class="flex flex-wrap gap-2">
                                            {cat
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class=move || {
                                                            format!(
                                                                "px-3 py-1.5 rounded-lg text-sm font-medium transition-colors {}",
                                                                theme
                                                                    .get()
                                                                    .pick(
                                                                        "bg-white/5 text-gray-300 group-hover:bg-white/10",
                                                                        "bg-gray-100 text-gray-700 group-hover:bg-gray-200",
                                                                    ),
                                                            )
                                                        }>{*skill}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
