//! Error Banner Component
//!
//! Shown in place of a page whose data failed to load.

use leptos::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="max-w-xl mx-auto my-12 bg-red-50 border border-red-200 rounded-xl p-6 text-center">
            <div class="text-4xl mb-2">"⚠️"</div>
            <h2 class="text-lg font-semibold text-red-800 mb-2">"Could not load this page"</h2>
            <p class="text-red-700 mb-4">{message}</p>
            <button
                on:click=move |_| on_retry.call(())
                class="px-5 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium"
            >
                "Try again"
            </button>
        </div>
    }
}
