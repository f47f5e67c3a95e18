use leptos::prelude::*;

/// Small circular loading spinner, sized for inline use in buttons
#[component]
pub fn Spinner(
    /// Optional label rendered next to the spinner
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2" role="status">
            <span class="inline-block w-4 h-4 rounded-full border-2 border-white/30 border-t-white animate-spin"></span>
            {(!label.is_empty()).then(|| view! { <span>{label}</span> })}
        </span>
    }
}
