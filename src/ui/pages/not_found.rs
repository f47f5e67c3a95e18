//! 404 page shown for any route other than the landing page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="min-h-[100dvh] bg-[#050505] text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 border border-white/10 rounded-full flex items-center justify-center">
                    <Icon name=icons::COMPASS class="w-12 h-12"/>
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-zinc-500 mb-8 max-w-md mx-auto">
                    "There is nothing here. Your next idea is one page back."
                </p>

                <A href="/" attr:class="btn-primary inline-flex">
                    "Back to valid8"
                </A>
            </div>
        </main>
    }
}
