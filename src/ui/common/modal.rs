use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Centered dialog over a blurred backdrop
///
/// Closes on the close button, a click on the backdrop itself, or Escape.
/// Content stays mounted while closed so in-flight work keeps its view.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    #[prop(default = "max-w-lg")] max_width: &'static str,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop"
                } else {
                    "modal-backdrop opacity-0 pointer-events-none"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(element) = e
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        && element.class_list().contains("modal-backdrop")
                    {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div
                class=format!("modal-card {}", max_width)
                role="dialog"
                aria-modal="true"
            >
                <div class="modal-accent"></div>
                <button
                    class="absolute top-4 right-4 p-1 opacity-70 hover:opacity-100 transition-opacity"
                    on:click=move |_| on_close.run(())
                    title="Close"
                    aria-label="Close modal"
                >
                    <Icon name=icons::X class="w-5 h-5"/>
                </button>
                {children()}
            </div>
        </div>
    }
}
