use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use crate::contact::{ContactEvent, ContactForm, Effect, Field, FormHandle, SubmissionStatus};
#[cfg(feature = "hydrate")]
use crate::contact::{ContactDriver, HttpTransport, ResetTimer, API_BASE_URL};
use crate::content::{Section, CONTACT_EMAIL, LOCATION};
use crate::theme::use_theme;

use super::footer::SocialIcons;
use super::section::SectionHeader;

impl FormHandle for RwSignal<ContactForm> {
    fn dispatch(&self, event: ContactEvent) -> Option<Effect> {
        self.try_update(|form| form.dispatch(event)).flatten()
    }

    fn status(&self) -> SubmissionStatus {
        self.with_untracked(|form| form.status().clone())
    }
}

/// Browser `setTimeout`, cancelled through its handle.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl ResetTimer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn start<F>(&self, after: std::time::Duration, on_expire: F) -> Option<TimeoutHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        set_timeout_with_handle(on_expire, after).ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let form = RwSignal::new(ContactForm::new());
    #[cfg(feature = "hydrate")]
    let driver = ContactDriver::new(form, HttpTransport::new(&API_BASE_URL), BrowserTimer);
    let muted = move || theme.get().pick("text-gray-400", "text-gray-500");
    let strong = move || theme.get().pick("text-white", "text-gray-900");

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // submissions only happen in the browser
        #[cfg(feature = "hydrate")]
        if let Some(submission) = driver.begin() {
            let driver = driver.clone();
            leptos::task::spawn_local(async move {
                driver.deliver(submission).await;
            });
        }
    };
    let is_pending = move || form.with(|f| f.status().is_pending());

    view! {
        <section
            id=Section::Contact.id()
            class=move || format!("py-24 px-4 {}", theme.get().pick("bg-surface-dark-2", "bg-gray-50"))
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    lead="Get in"
                    accent="Touch"
                    blurb="Have a project in mind or want to collaborate? Feel free to reach out!"
                />
                <div class="grid lg:grid-cols-5 gap-12">
                    <div class="lg:col-span-2 space-y-8 fade-in-left">
                        <div>
                            <h3 class=move || format!("text-xl font-bold mb-6 {}", strong())>
                                "Let's connect"
                            </h3>
                            <div class="space-y-5">
                                <InfoRow
                                    glyph="✉"
                                    gradient="from-primary to-accent"
                                    label="Email"
                                    value=CONTACT_EMAIL
                                />
                                <InfoRow
                                    glyph="📍"
                                    gradient="from-emerald-500 to-teal-600"
                                    label="Location"
                                    value=LOCATION
                                />
                            </div>
                        </div>
                        <div>
                            <h4 class=move || {
                                format!(
                                    "text-sm font-semibold mb-4 uppercase tracking-wider {}",
                                    muted(),
                                )
                            }>"Follow Me"</h4>
                            <div class="flex gap-3">
                                <SocialIcons />
                            </div>
                        </div>
                    </div>
                    <div class="lg:col-span-3 fade-in-right">
                        <form
                            on:submit=on_submit
                            class=move || {
                                format!(
                                    "glass rounded-2xl p-6 sm:p-8 {}",
                                    theme.get().pick("", "bg-white/80 border-gray-200/50"),
                                )
                            }
                        >
                            <div class="grid sm:grid-cols-2 gap-4 mb-4">
                                <TextField
                                    form
                                    field=Field::Name
                                    label="Name"
                                    kind="text"
                                    placeholder="John Doe"
                                />
                                <TextField
                                    form
                                    field=Field::Email
                                    label="Email"
                                    kind="email"
                                    placeholder="john@example.com"
                                />
                            </div>
                            <div class="mb-4">
                                <TextField
                                    form
                                    field=Field::Subject
                                    label="Subject"
                                    kind="text"
                                    placeholder="Project Collaboration"
                                />
                            </div>
                            <div class="mb-6">
                                <FieldLabel text="Message" />
                                <textarea
                                    name="message"
                                    required=true
                                    rows="5"
                                    placeholder="Tell me about your project..."
                                    class=move || format!("{} resize-none", input_class(theme.get()))
                                    prop:value=move || form.with(|f| f.message().message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.dispatch(ContactEvent::Edit(Field::Message, event_target_value(&ev)));
                                        })
                                    }
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=is_pending
                                class="w-full py-3.5 bg-gradient-to-r from-primary to-accent rounded-xl text-white font-semibold shadow-lg shadow-primary/25 hover:shadow-xl hover:shadow-primary/30 transition-shadow flex items-center justify-center gap-2 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if is_pending() {
                                        Either::Left(
                                            view! {
                                                <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin" />
                                                "Sending..."
                                            },
                                        )
                                    } else {
                                        Either::Right("➤ Send Message")
                                    }
                                }}
                            </button>
                            <div aria-live="polite">
                                {move || match form.with(|f| f.status().clone()) {
                                    SubmissionStatus::Success => {
                                        Some(
                                            Either::Left(
                                                view! {
                                                    <div class="mt-4 flex items-center gap-2 px-4 py-3 bg-emerald-500/10 border border-emerald-500/20 text-emerald-400 rounded-xl text-sm fade-in-up">
                                                        "✓ Message sent successfully! I'll get back to you soon."
                                                    </div>
                                                },
                                            ),
                                        )
                                    }
                                    SubmissionStatus::Failure(msg) => {
                                        Some(
                                            Either::Right(
                                                view! {
                                                    <div class="mt-4 flex items-center gap-2 px-4 py-3 bg-red-500/10 border border-red-500/20 text-red-400 rounded-xl text-sm fade-in-up">
                                                        "⚠ " {msg}
                                                    </div>
                                                },
                                            ),
                                        )
                                    }
                                    SubmissionStatus::Idle | SubmissionStatus::Pending => None,
                                }}
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn input_class(theme: crate::theme::Theme) -> String {
    format!(
        "w-full px-4 py-3 rounded-xl text-sm outline-none transition-all duration-300 focus:ring-2 focus:ring-primary/50 {}",
        theme.pick(
            "bg-white/5 border border-white/10 text-white placeholder-gray-500 focus:bg-white/10",
            "bg-gray-50 border border-gray-200 text-gray-900 placeholder-gray-400 focus:bg-white focus:border-primary/30",
        )
    )
}

#[component]
fn FieldLabel(text: &'static str) -> impl IntoView {
    let theme = use_theme();
    view! {
        <label class=move || {
            format!(
                "text-xs font-semibold uppercase tracking-wider mb-1.5 block {}",
                theme.get().pick("text-gray-400", "text-gray-500"),
            )
        }>{text}</label>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div>
            <FieldLabel text=label />
            <input
                type=kind
                name=label.to_lowercase()
                required=true
                placeholder=placeholder
                class=move || input_class(theme.get())
                prop:value=move || form.with(|f| f.message().field(field).to_string())
                on:input=move |ev| {
                    form.update(|f| {
                        f.dispatch(ContactEvent::Edit(field, event_target_value(&ev)));
                    })
                }
            />
        </div>
    }
}

#[component]
fn InfoRow(
    glyph: &'static str,
    gradient: &'static str,
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="flex items-center gap-4">
            <div class=format!(
                "w-11 h-11 rounded-xl bg-gradient-to-r {gradient} flex items-center justify-center text-white shrink-0",
            )>{glyph}</div>
            <div>
                <p class=move || {
                    format!("text-sm {}", theme.get().pick("text-gray-400", "text-gray-500"))
                }>{label}</p>
                <p class=move || {
                    format!(
                        "font-medium text-sm {}",
                        theme.get().pick("text-white", "text-gray-900"),
                    )
                }>{value}</p>
            </div>
        </div>
    }
}
