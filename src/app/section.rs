use leptos::prelude::*;

use crate::theme::use_theme;

#[component]
pub fn SectionHeader(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="text-center mb-16 fade-in-up">
            <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold font-display mb-4">
                {lead} " " <span class="gradient-text">{accent}</span>
            </h2>
            <div class="w-20 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full mb-4" />
            {blurb
                .map(|text| {
                    view! {
                        <p class=move || {
                            format!(
                                "max-w-lg mx-auto {}",
                                theme.get().pick("text-gray-400", "text-gray-500"),
                            )
                        }>{text}</p>
                    }
                })}
        </div>
    }
}

/// Translucent card used by every section, darker glass in dark mode.
pub fn card_class(theme: crate::theme::Theme, extra: &str) -> String {
    format!(
        "glass rounded-xl hover:glow transition-all duration-300 {} {extra}",
        theme.pick("", "bg-gray-50/80 border-gray-200/50")
    )
}
