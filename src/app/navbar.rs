use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::Section;
use crate::theme::use_theme;

const SCROLLED_PAST: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_PAST;
    let (mobile_open, set_mobile_open) = signal(false);

    let link_class = move || {
        format!(
            "px-4 py-2 rounded-lg text-sm font-medium transition-all duration-300 hover:text-primary {}",
            theme.get().pick("text-gray-300 hover:bg-white/5", "text-gray-600 hover:bg-gray-100")
        )
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 nav-enter {}",
                if scrolled() { "glass shadow-lg shadow-primary/5" } else { "bg-transparent" },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 lg:h-20">
                    <Logo />
                    <div class="hidden md:flex items-center gap-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a href=section.anchor() class=link_class>
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="md:hidden flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2 rounded-lg text-2xl leading-none"
                            aria-label="Toggle menu"
                            aria-expanded=move || mobile_open.get().to_string()
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || if mobile_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || mobile_open.get()>
                <div class=move || {
                    format!(
                        "md:hidden glass border-t {}",
                        theme.get().pick("border-white/10", "border-gray-200"),
                    )
                }>
                    <div class="px-4 py-3 space-y-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.anchor()
                                        on:click=move |_| set_mobile_open.set(false)
                                        class=move || format!("block {}", link_class())
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn Logo() -> impl IntoView {
    let theme = use_theme();
    view! {
        <a href=Section::Home.anchor() class="text-xl lg:text-2xl font-bold font-display">
            <span class="gradient-text">"<Sasi"</span>
            <span class=move || theme.get().pick("text-white", "text-gray-900")>"kumar />"</span>
        </a>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class=move || {
                format!(
                    "ml-2 p-2.5 rounded-xl transition-colors {}",
                    theme
                        .get()
                        .pick(
                            "bg-white/10 text-yellow-400 hover:bg-white/20",
                            "bg-gray-100 text-indigo-600 hover:bg-gray-200",
                        ),
                )
            }
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
