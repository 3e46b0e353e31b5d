use leptos::prelude::*;

use crate::content::{
    EducationEntry, EducationKind, Section, CERTIFICATIONS, EDUCATION, INTERNSHIP,
};
use crate::theme::use_theme;

use super::section::{card_class, SectionHeader};

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let heading = move || {
        format!(
            "text-xl font-bold mb-6 flex items-center gap-2 {}",
            theme.get().pick("text-white", "text-gray-900")
        )
    };
    let muted = move || theme.get().pick("text-gray-400", "text-gray-500");

    view! {
        <section
            id=Section::About.id()
            class=move || format!("py-24 px-4 {}", theme.get().pick("bg-surface-dark", "bg-white"))
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeader lead="About" accent="Me" />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="fade-in-up">
                        <h3 class=heading>
                            <span class="text-primary text-2xl">"🎓"</span>
                            "Education"
                        </h3>
                        <div class="space-y-6 relative">
                            <div class=move || {
                                format!(
                                    "absolute left-4 top-2 bottom-2 w-0.5 {}",
                                    theme.get().pick("bg-white/10", "bg-gray-200"),
                                )
                            } />
                            {EDUCATION
                                .iter()
                                .enumerate()
                                .map(|(i, entry)| view! { <TimelineItem entry index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="space-y-10">
                        <div class="fade-in-up">
                            <h3 class=heading>
                                <span class="text-primary text-xl">"💼"</span>
                                "Internship"
                            </h3>
                            <div class=move || card_class(theme.get(), "p-6 hover:scale-[1.02]")>
                                <div class="flex items-start gap-4">
                                    <div class="w-12 h-12 rounded-xl bg-gradient-to-r from-primary to-accent flex items-center justify-center text-white text-xl shrink-0">
                                        "☁️"
                                    </div>
                                    <div>
                                        <h4 class="font-bold text-lg">{INTERNSHIP.title}</h4>
                                        <p class=move || format!("text-sm mt-1 {}", muted())>
                                            {format!("{} · {}", INTERNSHIP.year, INTERNSHIP.summary)}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                        <div class="fade-in-up">
                            <h3 class=heading>
                                <span class="text-primary text-xl">"🏅"</span>
                                "Certifications"
                            </h3>
                            <div class="space-y-4">
                                {CERTIFICATIONS
                                    .iter()
                                    .map(|cert| {
                                        view! {
                                            <div class=move || card_class(theme.get(), "p-5")>
                                                <h4 class="font-semibold">{cert.title}</h4>
                                                <p class="text-sm text-primary mt-1">{cert.issuer}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: &'static EducationEntry, index: usize) -> impl IntoView {
    let theme = use_theme();
    let icon = match entry.kind {
        EducationKind::Degree => "🎓",
        EducationKind::School => "📖",
    };
    // staggered entrance, one step per entry
    let style = format!("animation-delay: {}ms", index * 150);

    view! {
        <div class="relative pl-12 fade-in-left" style=style>
            <div class="absolute left-2 top-1 w-5 h-5 rounded-full bg-gradient-to-r from-primary to-accent flex items-center justify-center">
                <div class=move || {
                    format!(
                        "w-2 h-2 rounded-full {}",
                        theme.get().pick("bg-surface-dark", "bg-white"),
                    )
                } />
            </div>
            <div class=move || card_class(theme.get(), "p-5")>
                <h4 class="font-bold text-lg">
                    <span class="mr-2" aria-hidden="true">{icon}</span>
                    {entry.degree}
                </h4>
                {entry
                    .place
                    .map(|place| {
                        view! {
                            <p class=move || {
                                format!(
                                    "text-sm mt-1 {}",
                                    theme.get().pick("text-gray-400", "text-gray-500"),
                                )
                            }>{place}</p>
                        }
                    })}
                <div class="flex items-center gap-3 mt-2">
                    <span class="text-sm font-semibold text-primary">{entry.score}</span>
                    {entry
                        .years
                        .map(|years| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "text-xs px-2 py-0.5 rounded-full {}",
                                        theme.get().pick("bg-white/5 text-gray-400", "bg-gray-100 text-gray-500"),
                                    )
                                }>{years}</span>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
