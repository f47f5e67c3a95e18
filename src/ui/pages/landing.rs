//! Landing page component
//!
//! A single screen featuring:
//! - Header with the logo mark and the outbound waitlist form link
//! - Hero with the idea input, Generate and "Surprise me" buttons
//! - Feature pills and footer
//! - Private beta modal with the waitlist email form
//!
//! All page state lives in one [`LandingView`] signal. Async work (the
//! shuffle timer, the signup request) writes back through `try_update`, so a
//! task that outlives the page does nothing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{EventKind, LandingView, SubmitRejected, WAITLIST_FORM_URL};
use crate::ui::client::{emit_event, submit_waitlist};
use crate::ui::common::{ErrorMessage, Modal, Spinner, SuccessMessage};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LandingPage() -> impl IntoView {
    let state = RwSignal::new(LandingView::new());

    let is_shuffling = Memo::new(move |_| state.with(|v| v.is_shuffling()));
    let capture_open = Signal::derive(move || state.with(|v| v.is_capture_open()));

    let generate = move || {
        state.update(|v| {
            v.generate();
        });
    };

    let surprise_me = move |_| {
        let started = state.try_update(|v| v.start_shuffle()).unwrap_or(false);
        if started {
            spawn_local(emit_event(EventKind::RandomIdeaClick));
            drive_shuffle(state);
        }
    };

    view! {
        <main class="min-h-[100dvh] bg-[#050505] text-white px-4 py-6 md:p-12 font-sans flex flex-col overflow-hidden relative">
            // Ambient glow
            <div class="fixed inset-0 pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-[120px]"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-[120px]"></div>
            </div>

            <header class="flex justify-between items-center mb-auto relative z-10">
                <div class="flex items-center gap-2">
                    <div class="w-8 h-8 bg-white rounded-lg flex items-center justify-center">
                        <span class="text-black font-bold text-lg">"V"</span>
                    </div>
                    <span class="font-bold text-xl tracking-tight">"valid8"</span>
                </div>
                <a
                    href=WAITLIST_FORM_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-sm text-zinc-400 hover:text-white transition-colors hidden sm:block"
                >
                    "Join Waitlist →"
                </a>
            </header>

            <div class="flex-1 flex flex-col items-center justify-center max-w-3xl mx-auto w-full text-center relative z-10 py-12">
                <div class="mb-8 md:mb-12 fade-up">
                    <div class="inline-flex items-center gap-2 bg-white/5 border border-white/10 rounded-full px-4 py-2 mb-6 md:mb-8">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-emerald-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-emerald-500"></span>
                        </span>
                        <span class="text-xs md:text-sm text-zinc-400">"Now in private beta"</span>
                    </div>

                    <h1 class="text-4xl sm:text-5xl md:text-7xl font-bold tracking-tighter mb-4 md:mb-6 leading-[1.1]">
                        <span class="bg-gradient-to-b from-white via-white to-zinc-500 bg-clip-text text-transparent">
                            "Validate your idea"
                        </span>
                        <br/>
                        <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-orange-400 bg-clip-text text-transparent">
                            "in seconds."
                        </span>
                    </h1>
                    <p class="text-base md:text-xl text-zinc-500 max-w-xl mx-auto px-2">
                        "Describe your concept. We generate the entire validation kit: ads, branding, landing pages, and copy."
                    </p>
                </div>

                <div class="w-full max-w-2xl px-2 fade-up fade-up-delay">
                    <div class="relative group">
                        <div class="absolute -inset-1 bg-gradient-to-r from-purple-500/20 via-pink-500/20 to-orange-500/20 rounded-2xl blur opacity-40 group-hover:opacity-60 transition duration-500"></div>
                        <div class="relative bg-zinc-900/80 backdrop-blur border border-white/10 rounded-xl md:rounded-2xl p-2 shadow-2xl">
                            <div class="flex flex-col sm:flex-row gap-2">
                                <input
                                    type="text"
                                    placeholder="Describe your idea..."
                                    aria-label="Your startup idea"
                                    class="flex-1 bg-transparent border-none outline-none px-4 py-3 md:py-4 text-base md:text-lg placeholder:text-zinc-600 w-full"
                                    class:shuffling=move || is_shuffling.get()
                                    autofocus=true
                                    prop:readonly=move || is_shuffling.get()
                                    prop:value=move || state.with(|v| v.idea().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|v| v.set_idea(value));
                                    }
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            generate();
                                        }
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn-secondary"
                                    title="Shuffle a random idea"
                                    disabled=move || is_shuffling.get()
                                    on:click=surprise_me
                                >
                                    <Icon name=icons::SHUFFLE class="w-4 h-4"/>
                                    <span>"Surprise me"</span>
                                </button>
                                <button
                                    type="button"
                                    class="btn-primary"
                                    disabled=move || !state.with(|v| v.can_generate())
                                    on:click=move |_| generate()
                                >
                                    <span>"Generate"</span>
                                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4"/>
                                </button>
                            </div>
                        </div>
                    </div>

                    <FeaturePills/>
                </div>
            </div>

            <footer class="text-center text-xs text-zinc-600 mt-auto relative z-10">
                <p>"© 2025 Valid8. All rights reserved."</p>
            </footer>

            <Modal
                is_open=capture_open
                on_close=Callback::new(move |_| state.update(|v| v.close_capture()))
            >
                <WaitlistCapture state=state/>
            </Modal>
        </main>
    }
}

#[component]
fn FeaturePills() -> impl IntoView {
    let pills = [
        (icons::SPARKLES, "AI-Powered"),
        (icons::PLAY, "Sora Video"),
        (icons::INSTAGRAM, "Social Ready"),
        (icons::GLOBE, "Landing Page"),
    ];

    view! {
        <div class="mt-6 md:mt-8 flex flex-wrap justify-center gap-2 md:gap-3 text-xs md:text-sm text-zinc-600">
            {pills
                .into_iter()
                .map(|(icon, label)| {
                    view! {
                        <span class="pill">
                            <Icon name=icon class="w-3 h-3"/>
                            {label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Modal body: the email form, or the confirmation once joined
#[component]
fn WaitlistCapture(state: RwSignal<LandingView>) -> impl IntoView {
    let submitting = Memo::new(move |_| state.with(|v| v.status().is_submitting()));
    let confirmed_idea = Memo::new(move |_| {
        state.with(|v| v.status().confirmed_idea().map(str::to_string))
    });
    let error = Signal::derive(move || {
        state.with(|v| v.status().error_message().map(str::to_string))
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let signup = match state.try_update(|v| v.begin_submit()) {
            Some(Ok(signup)) => signup,
            Some(Err(SubmitRejected::EmptyEmail)) | None => return,
            Some(Err(rejected)) => {
                leptos::logging::log!("Signup not sent: {}", rejected);
                return;
            }
        };

        spawn_local(async move {
            let result = submit_waitlist(&signup).await;
            let joined = state.try_update(|v| v.finish_submit(result)).unwrap_or(false);
            if joined {
                emit_event(EventKind::WaitlistSignup).await;
            }
        });
    };

    view! {
        <div class="text-center">
            <div class="w-16 h-16 md:w-20 md:h-20 mx-auto mb-6 rounded-2xl bg-gradient-to-br from-purple-500/20 to-pink-500/20 border border-white/10 flex items-center justify-center">
                <Icon name=icons::ZAP class="w-8 h-8 md:w-10 md:h-10"/>
            </div>

            <h2 class="text-2xl md:text-3xl font-bold mb-3 tracking-tight">
                "We're in Private Beta"
            </h2>
            <p class="text-zinc-400 text-sm md:text-base mb-6 max-w-sm mx-auto">
                "Valid8 is currently available to a limited number of early adopters. Join the waitlist to get early access."
            </p>

            <Show
                when=move || confirmed_idea.get().is_some()
                fallback=move || {
                    view! {
                        <form class="space-y-3 text-left" on:submit=submit>
                            <input
                                type="email"
                                required=true
                                placeholder="you@example.com"
                                aria-label="Email address"
                                class="email-input"
                                prop:disabled=move || submitting.get()
                                prop:value=move || state.with(|v| v.email().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|v| v.set_email(value));
                                }
                            />
                            <ErrorMessage error=error/>
                            <button
                                type="submit"
                                class="btn-gradient"
                                disabled=move || !state.with(|v| v.can_submit())
                            >
                                <Show
                                    when=move || submitting.get()
                                    fallback=|| view! { <span>"Join the Waitlist"</span> }
                                >
                                    <Spinner label="Joining...".to_string()/>
                                </Show>
                            </button>
                        </form>
                    }
                }
            >
                <SuccessMessage message=Signal::derive(|| {
                    Some("You're on the waitlist!".to_string())
                })/>
                <div class="mt-4 rounded-xl border border-white/10 bg-white/5 px-4 py-3 text-left">
                    <p class="text-xs uppercase tracking-wide text-zinc-500">"Your idea"</p>
                    <p class="text-sm text-zinc-200 break-words">
                        {move || confirmed_idea.get().unwrap_or_default()}
                    </p>
                </div>
            </Show>

            <p class="text-xs text-zinc-600 mt-4">
                "We'll notify you when your spot is ready. Prefer a form? "
                <a
                    href=WAITLIST_FORM_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="underline hover:text-zinc-300"
                >
                    "Open the waitlist form"
                </a>
            </p>
        </div>
    }
}

/// Step the shuffle on a timer, then open the capture surface
#[cfg(not(feature = "ssr"))]
fn drive_shuffle(state: RwSignal<LandingView>) {
    use crate::core::{CAPTURE_OPEN_DELAY_MS, SHUFFLE_INTERVAL_MS};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::spawn_local;

    spawn_local(async move {
        loop {
            let Some(tick) = state.try_update(|v| v.shuffle_tick(&mut rand::thread_rng())) else {
                return;
            };
            if tick.idea().is_none() {
                return;
            }
            if tick.is_done() {
                break;
            }
            TimeoutFuture::new(SHUFFLE_INTERVAL_MS).await;
        }

        TimeoutFuture::new(CAPTURE_OPEN_DELAY_MS).await;
        state.try_update(|v| v.complete_shuffle());
    });
}

#[cfg(feature = "ssr")]
fn drive_shuffle(_state: RwSignal<LandingView>) {}
