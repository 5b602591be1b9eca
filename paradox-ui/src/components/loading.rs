//! Loading Component

use leptos::*;

/// Full-width spinner shown while a page fetches
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-gray-500">
            <div class="loading-spinner w-10 h-10 mb-4" />
            <p>"Loading..."</p>
        </div>
    }
}
