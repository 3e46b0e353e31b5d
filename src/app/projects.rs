use leptos::prelude::*;

use crate::content::{Project, Section, PROJECTS};
use crate::theme::use_theme;

use super::section::SectionHeader;

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section
            id=Section::Projects.id()
            class=move || format!("py-24 px-4 {}", theme.get().pick("bg-surface-dark", "bg-white"))
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeader lead="My" accent="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="group relative hover:-translate-y-3 transition-transform duration-300 fade-in-up">
            <div class=format!(
                "absolute -inset-0.5 bg-gradient-to-r {} rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-500 blur-sm",
                project.gradient,
            ) />
            <div class=move || {
                format!(
                    "relative h-full glass rounded-2xl p-6 flex flex-col overflow-hidden {}",
                    theme.get().pick("bg-surface-dark-2", "bg-white border border-gray-200"),
                )
            }>
                <div class=format!(
                    "absolute top-0 left-0 right-0 h-1 bg-gradient-to-r {}",
                    project.gradient,
                ) />
                <div class="flex items-center gap-3 mb-4 mt-2">
                    <div class=format!(
                        "w-10 h-10 rounded-lg bg-gradient-to-r {} flex items-center justify-center text-white text-lg",
                        project.gradient,
                    )>"🚀"</div>
                    <h3 class="text-lg font-bold">{project.title}</h3>
                </div>
                <p class=move || {
                    format!(
                        "text-sm leading-relaxed mb-5 flex-grow {}",
                        theme.get().pick("text-gray-400", "text-gray-500"),
                    )
                }>{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-5">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "px-2.5 py-1 rounded-md text-xs font-medium {}",
                                        theme
                                            .get()
                                            .pick(
                                                "bg-primary/10 text-primary-light",
                                                "bg-primary/5 text-primary-dark",
                                            ),
                                    )
                                }>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3 mt-auto">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || {
                            format!(
                                "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors {}",
                                theme
                                    .get()
                                    .pick(
                                        "bg-white/5 text-gray-300 hover:bg-white/10 hover:text-white",
                                        "bg-gray-100 text-gray-700 hover:bg-gray-200",
                                    ),
                            )
                        }
                    >
                        <i class="devicon-github-plain" />
                        "GitHub"
                    </a>
                    {project
                        .demo
                        .map(|demo| {
                            view! {
                                <a
                                    href=demo
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium bg-gradient-to-r from-primary to-accent text-white shadow-lg shadow-primary/20"
                                >
                                    "↗ Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
